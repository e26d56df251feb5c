//! Basic derror example
//!
//! Demonstrates both construction paths, client-safe wire output, and
//! manager logging in debug and production modes.

use derror::{new_error, std_err, EnvResult, ErrManager, SplitError};
use std::io;

fn main() {
    println!("=== derror Basic Example ===\n");

    // Debug manager: rendered lines name the construction site.
    let em = ErrManager::new().debug(true);

    // A handler with nothing reviewed for disclosure: the caller gets the
    // generic message plus a correlation code.
    if let Err(env) = load_session() {
        println!("client sees : {}", env.public_message());
        if let Ok(body) = env.to_wire() {
            println!("wire body   : {}", String::from_utf8_lossy(&body));
        }
        em.println(&env);
    }

    // A handler with reviewed public text and context.
    if let Err(env) = checkout() {
        println!("client sees : {}", env.public_message());
        println!("status code : {}", env.status_code());
        if let Ok(body) = env.to_wire() {
            println!("wire body   : {}", String::from_utf8_lossy(&body));
        }
        em.println(&env);
    }

    // The same failure through a production manager: no site information.
    let em = ErrManager::new();
    if let Err(env) = checkout() {
        em.println(&env);
    }
}

fn load_session() -> EnvResult<()> {
    let cause = io::Error::new(io::ErrorKind::TimedOut, "session store timed out");
    Err(std_err!(cause))
}

fn checkout() -> EnvResult<()> {
    let cause = io::Error::new(io::ErrorKind::Other, "fk violation on orders.user_id");
    Err(new_error!(SplitError::new(cause)
        .public("could not complete checkout, please retry")
        .context("checkout")))
}
