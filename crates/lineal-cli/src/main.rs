//! lineal - interactive linear algebra console.
//!
//! Nested text menus over the lineal numeric core: matrix
//! add/subtract/scalar-multiply/multiply/transpose/norm/inverse/
//! eigenvalues/determinant, and vector add/subtract/inner-product.
//! All element entry is integer; failed operations print their error
//! and the menu keeps running.

use std::io;

use clap::Parser;

use lineal_cli::menu;

/// Interactive linear algebra console
#[derive(Parser)]
#[command(name = "lineal")]
#[command(about = "Interactive linear algebra console", version)]
struct Cli {}

fn main() -> io::Result<()> {
    let _cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    menu::run(&mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}
