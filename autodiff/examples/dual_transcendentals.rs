//! Second-order derivatives of transcendental functions with `DualNum`.
//!
//! Each example prints `[f, f′, f″]` next to the closed form, then shows
//! how `reparam` turns derivatives in arc length into derivatives in time.
//!
//! Run with: `cargo run -p autodiff --example dual_transcendentals`

use autodiff::DualNum;

enum X {}
enum ArcLength {}
enum Time {}

fn show(label: &str, d: DualNum<X>, expected: [f64; 3]) {
    println!("{}", label);
    println!("  terms    = {:?}", d.terms());
    println!("  expected = {:?}", expected);
    println!();
}

fn main() {
    println!("=== DualNum: Transcendental Functions ===\n");

    // f(x) = e^x at x = 0
    let x = DualNum::<X>::variable(0.0, 3);
    show("f(x) = e^x at x = 0", x.exp(), [1.0, 1.0, 1.0]);

    // f(x) = ln(x) at x = 2
    let x = DualNum::<X>::variable(2.0, 3);
    show("f(x) = ln(x) at x = 2", x.ln(), [2f64.ln(), 0.5, -0.25]);

    // f(x) = sin(x) at x = π/2
    let x = DualNum::<X>::variable(std::f64::consts::FRAC_PI_2, 3);
    show("f(x) = sin(x) at x = π/2", x.sin(), [1.0, 0.0, -1.0]);

    // f(x) = √x at x = 9
    let x = DualNum::<X>::variable(9.0, 3);
    show("f(x) = √x at x = 9", x.sqrt(), [3.0, 1.0 / 6.0, -1.0 / 108.0]);

    // σ(x) = 1 / (1 + e^(−x)) at x = 0
    let x = DualNum::<X>::variable(0.0, 3);
    let sigmoid = (-x).exp().offset(1.0).recip();
    show("σ(x) = 1/(1 + e^(−x)) at x = 0", sigmoid, [0.5, 0.25, 0.0]);

    println!("=== Reparametrization ===\n");

    // Heading of an arc with curvature 0.5, driven with s(t) = t² from t = 1
    let s = DualNum::<ArcLength>::variable(1.0, 3);
    let heading = s.scale(0.5);
    let s_of_t = DualNum::<Time>::new(&[1.0, 2.0, 2.0]);
    let in_time = heading.reparam(s_of_t);
    println!("heading(s)    = {:?}", heading.terms());
    println!("heading(s(t)) = {:?}", in_time.terms());
    println!("  expected      [0.5, 1.0, 1.0]");
}
