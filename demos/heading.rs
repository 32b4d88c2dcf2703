use planar::vector_model::*;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // a ship facing north chasing a target
    let ship = Points::new(2.0, -1.5);
    let target = Points::new(-3.0, 4.0);
    let mut facing = Vector::new(0.0, 1.0);

    let to_target = Vector::between(ship, target);
    println!("ship {} -> target {}: {}", ship, target, to_target);
    println!("distance {:.2}, heading {}", to_target.length(), to_target.heading_angle());

    // turn in 15 degree steps until within one step of the target heading
    while facing.angle_between(to_target)? > 15 {
        let turn = if (facing.heading_angle() - to_target.heading_angle() + 360.0) % 360.0 > 180.0 {
            -15.0
        } else {
            15.0
        };
        facing = facing.rotate(turn);
        println!("facing {} heading {}", facing, facing.heading_angle());
    }

    let thrust = facing.normalized()? * 2.5;
    println!("thrust {}", thrust);

    // a zero vector has no direction
    if let Err(err) = Vector::default().normalized() {
        println!("expected failure: {}", err);
    }

    Ok(())
}
