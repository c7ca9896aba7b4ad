//! Interactive matrix calculator over stdin/stdout.
//!
//! Reads a dimension and two square integer matrices, then dispatches
//! single-token commands until `e`:
//!
//! - `m`  — print A * B
//! - `p`  — print A + B
//! - `d`  — print A - B
//! - `ta` / `tb` — read a scalar, print A (or B) scaled by it
//! - `va` / `vb` — read a vector, print A (or B) times it

use std::io;

use dynalg::io::{ReadError, TokenReader};
use dynalg::{DynVector, SquareMatrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut tokens = TokenReader::new(stdin.lock());

    println!("matrix dimension:");
    let size: usize = tokens.parse()?;

    let mut a = SquareMatrix::<i64>::new(size)?;
    println!("matrix A ({0} rows of {0} integers):", size);
    a.read_from(&mut tokens)?;

    let mut b = SquareMatrix::<i64>::new(size)?;
    println!("matrix B ({0} rows of {0} integers):", size);
    b.read_from(&mut tokens)?;

    loop {
        println!(
            "e - quit, m - A*B, p - A+B, d - A-B, \
             ta/tb - scale A/B, va/vb - A/B times a vector"
        );
        let command = match tokens.next_token() {
            Ok(t) => t.to_string(),
            Err(ReadError::UnexpectedEof) => break,
            Err(e) => return Err(e.into()),
        };
        match command.as_str() {
            "e" => break,
            "m" => print!("{}", a.try_mul(&b)?),
            "p" => print!("{}", a.try_add(&b)?),
            "d" => print!("{}", a.try_sub(&b)?),
            "ta" | "tb" => {
                println!("scalar:");
                let t: i64 = tokens.parse()?;
                let m = if command == "ta" { &a } else { &b };
                print!("{}", m * t);
            }
            "va" | "vb" => {
                println!("vector ({} integers):", size);
                let mut v = DynVector::<i64>::new(size)?;
                v.read_from(&mut tokens)?;
                let m = if command == "va" { &a } else { &b };
                println!("{}", m.mul_vector(&v)?);
            }
            _ => println!("unrecognized command"),
        }
    }
    Ok(())
}
