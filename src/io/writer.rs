//! Route output.

use std::io::{self, Write};

use crate::models::{Driver, Solution};

/// Renders a driver's route as `[id1,id2,...]`.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Driver, DriverId};
/// use u_dispatch::io::format_route;
///
/// let driver = Driver::new(DriverId::new(1), vec![3, 1, 2]);
/// assert_eq!(format_route(&driver), "[3,1,2]");
/// ```
pub fn format_route(driver: &Driver) -> String {
    let ids: Vec<String> = driver.loads().iter().map(|id| id.to_string()).collect();
    format!("[{}]", ids.join(","))
}

/// Writes every route of a solution on its own line, in driver order.
pub fn write_routes<W: Write>(writer: &mut W, solution: &Solution) -> io::Result<()> {
    for driver in solution.drivers() {
        writeln!(writer, "{}", format_route(driver))?;
    }
    Ok(())
}
