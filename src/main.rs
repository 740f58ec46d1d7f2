use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_dh_kinematics::jacobian::{DEFAULT_DELTA, DEFAULT_SINGULARITY_THRESHOLD, Jacobian};
use rs_dh_kinematics::kinematic_traits::kinematics_traits::Kinematics;
use rs_dh_kinematics::kinematics_impl::{DhKinematics, extract_position_and_orientation};
use rs_dh_kinematics::parameters::dh_kinematics::DhTable;
use rs_dh_kinematics::utils::{as_radians, dump_position};
use rs_dh_kinematics::workspace::workspace_analysis;

/// Console analysis report for the reference 5-DOF arm.
fn main() -> Result<()> {
    let robot = DhKinematics::new(DhTable::articulated_5dof());

    println!("{}", "=".repeat(60));
    println!("Serial manipulator analysis, {} DOF", robot.dof());
    println!("{}", "=".repeat(60));

    println!("\n1. DH parameters:");
    print!("{}", robot.table().to_table());

    println!("\n2. Workspace analysis (1000 random samples):");
    let mut rng = StdRng::from_entropy();
    let (_, stats) = workspace_analysis(&robot, 1000, &mut rng)?;
    println!("X range: [{:.2}, {:.2}] mm", stats.x_range[0], stats.x_range[1]);
    println!("Y range: [{:.2}, {:.2}] mm", stats.y_range[0], stats.y_range[1]);
    println!("Z range: [{:.2}, {:.2}] mm", stats.z_range[0], stats.z_range[1]);
    println!("Max reach: {:.2} mm", stats.max_reach);
    println!("Min reach: {:.2} mm", stats.min_reach);
    println!(
        "Center: [{:.2}, {:.2}, {:.2}] mm",
        stats.center.x, stats.center.y, stats.center.z
    );
    println!(
        "Std dev: [{:.2}, {:.2}, {:.2}] mm",
        stats.std_dev.x, stats.std_dev.y, stats.std_dev.z
    );

    println!("\n3. Specific configurations:");
    let configurations = [
        (as_radians([0, 0, 0, 0, 0]), "Home position"),
        (as_radians([90, 0, 0, 0, 0]), "First joint rotated 90 degrees"),
        (as_radians([0, 90, 0, 0, 0]), "Second joint raised 90 degrees"),
        (as_radians([45, 45, 45, 45, 45]), "All joints at 45 degrees"),
    ];

    for (joints, description) in &configurations {
        println!("\n{}:", description);
        let pose = robot.forward(joints)?;
        let (position, _) = extract_position_and_orientation(&pose);
        print!("  Position (mm): ");
        dump_position(&position);

        let jacobian = Jacobian::new(&robot, joints, DEFAULT_DELTA)?;
        println!("  Jacobian condition number: {:.2}", jacobian.condition_number());
        println!("  Singularity measure: {:.6}", jacobian.manipulability());
        if jacobian.is_near_singular(DEFAULT_SINGULARITY_THRESHOLD) {
            println!("  Warning: the arm is close to a singular configuration!");
        }
    }

    println!("\n4. Dimensions:");
    println!("Total length (sum of a): {} mm", robot.table().total_length());
    println!("Total height (sum of d): {} mm", robot.table().total_offset());

    println!("\n5. Degrees of freedom: {} DOF", robot.dof());
    println!("Capabilities:");
    match robot.dof() {
        dof if dof >= 6 => println!("  - full position and orientation in 3D space"),
        5 => println!("  - full position, constrained orientation"),
        dof if dof >= 3 => println!("  - position in 3D space"),
        _ => println!("  - limited motion"),
    }

    Ok(())
}
