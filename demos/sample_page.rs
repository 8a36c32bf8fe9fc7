//! Sample page: projects a point onto a line and a plane, then rebuilds a
//! line as the intersection of two planes through it.
//!
//! Run with `RUST_LOG=debug cargo run --example sample_page` for more detail.

use geom3d::{Line3D, Plane3D, Point3D, Vector3D};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run() {
        warn!(error = %e, "sample page aborted");
        std::process::exit(1);
    }
}

fn run() -> geom3d::Result<()> {
    let p1 = Point3D::new(3.0, 2.0, 1.0);
    let l1 = Line3D::new(Point3D::new(0.0, 0.0, 2.0), Vector3D::new(1.0, 0.0, 0.0))?;
    let e1 = Plane3D::from_line_point(&l1, Point3D::new(1.0, 0.0, 0.0))?;

    let p2 = p1.project_on_line(&l1, false)?;
    let p3 = p1.project_on_plane(&e1)?;
    info!(point = %p1, line = %l1, foot = %p2, "projected point on line");
    info!(point = %p1, plane = %e1, foot = %p3, "projected point on plane");

    println!("Point1                : {}", p1);
    println!("Line1                 : {}", l1);
    println!("Plane1                : {}", e1);
    println!("Point1 -> Line1       : {}", p2);
    println!("Point1 -> Plane1      : {}", p3);
    println!();

    // Coincident feet would leave no direction for the line.
    match Line3D::from_points(p2, p3) {
        Ok(line) => println!("Line(Point2, Point3)  : {}", line),
        Err(e) => {
            warn!(error = %e, from = %p2, to = %p3, "no line through projected points");
            println!("Line(Point2, Point3)  : {}", e);
        }
    }
    println!();

    let il = Line3D::from_points(Point3D::new(1.0, 1.0, 2.0), Point3D::new(7.0, 5.0, 3.0))?;
    let ip1 = Plane3D::from_line_point(&il, Point3D::new(5.0, 5.0, 5.0))?;
    let ip2 = Plane3D::from_line_point(&il, Point3D::new(5.0, -5.0, 5.0))?;
    let il2 = Plane3D::intersect_planes(&ip1, &ip2)?;
    info!(first = %ip1, second = %ip2, line = %il2, "intersected planes");

    println!("Line1                 : {}", il);
    println!("Line1 (reconstructed) : {}", il2);

    let angle = Vector3D::angle_between(&il.direction(), &il2.direction())?;
    debug!(angle, "angle between original and reconstructed direction");

    Ok(())
}
