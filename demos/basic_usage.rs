use http_errors::{HttpError, Result};

fn find_order(id: u64) -> Result<&'static str> {
    // Simulate a lookup that misses
    if id == 404 {
        return Err(HttpError::not_found(
            "order",
            format!("orders table has no row for id {}", id),
            None,
        ));
    }
    Ok("order-ok")
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    match find_order(404) {
        Ok(order) => println!("Found {}", order),
        Err(err) => {
            // SCENARIO 1: The External Client
            // Only the code and the public message leave the process.
            println!("1. [RESPONSE] What the client sees:");
            println!("   status={} body=\"{}\"", err.code(), err.public_message());

            // SCENARIO 2: The Operator
            // The log line carries the private message and the call site.
            println!("\n2. [LOG] What the operator sees:");
            println!("   {}", err.describe());
        }
    }
}
