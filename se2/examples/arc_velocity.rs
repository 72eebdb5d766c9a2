//! Velocity and acceleration of a vehicle following a circular arc.
//!
//! The pose is built as a function of arc length with `DualTransform::exp`,
//! then reparametrized to time for a vehicle accelerating along the arc.
//!
//! Run with: `RUST_LOG=info cargo run -p se2 --example arc_velocity`

use autodiff::DualNum;
use se2::{local_error, DualTransform, DualTwistIncrement, DualVector, Transform};

enum ArcLength {}
enum Time {}

const CURVATURE: f64 = 0.5;
const SPEED: f64 = 2.0;
const ACCELERATION: f64 = 0.5;

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

/// Pose after driving `s` along the arc, with derivatives in `s`.
fn pose_at(s: f64) -> DualTransform<ArcLength> {
    let s = DualNum::<ArcLength>::variable(s, 3);
    DualTransform::exp(DualTwistIncrement::new(
        DualVector::new(s, DualNum::constant(0.0, 3)),
        s.scale(CURVATURE),
    ))
}

fn main() {
    init_tracing();

    let mut previous: Option<Transform> = None;
    for step in 0..=8 {
        let t = f64::from(step) * 0.25;
        let s = SPEED * t + 0.5 * ACCELERATION * t * t;
        let s_of_t = DualNum::<Time>::new(&[s, SPEED + ACCELERATION * t, ACCELERATION]);

        let pose = pose_at(s).reparam(s_of_t);
        let twist = pose.velocity();
        let value = pose.value();

        tracing::info!(
            t,
            x = value.translation.x,
            y = value.translation.y,
            heading = value.rotation.log(),
            speed = twist.trans_vel.value().norm(),
            yaw_rate = twist.rot_vel.value(),
            yaw_accel = twist.rot_vel.term(1),
            "arc sample"
        );

        if let Some(prev) = previous {
            let e = local_error(&value, &prev);
            tracing::debug!(
                along = e.trans_error.x,
                across = e.trans_error.y,
                turn = e.rot_error,
                "motion since previous sample"
            );
        }
        previous = Some(value);
    }
}
