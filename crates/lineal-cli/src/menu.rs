//! Nested menu loops driving the lineal numeric core.
//!
//! Every function takes its streams as `BufRead`/`Write` so scripted
//! sessions can drive the whole console in tests. Library errors go to the
//! error stream and the current menu keeps running; end of input unwinds
//! every menu and ends the session cleanly.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use lineal::error::LinealError;
use lineal::primitives::{Matrix, Vector};

/// Runs the top-level menu until the user exits or input ends.
pub fn run(
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    loop {
        writeln!(out, "{}", "Menu:".bold())?;
        writeln!(out, "1. Matrix Operations")?;
        writeln!(out, "2. Vector Operations")?;
        writeln!(out, "3. Exit")?;
        let Some(choice) = prompt_i64(input, out, "Enter your choice: ")? else {
            return Ok(());
        };
        match choice {
            1 => matrix_menu(input, out, err)?,
            2 => vector_menu(input, out, err)?,
            3 => {
                writeln!(out, "Exiting program.")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please enter a number between 1 and 3.")?,
        }
    }
}

fn matrix_menu(
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    let Some(mat1) = read_matrix(input, out, "matrix 1")? else {
        return Ok(());
    };
    writeln!(out, "Matrix 1:")?;
    writeln!(out, "{mat1}")?;
    let Some(mat2) = read_matrix(input, out, "matrix 2")? else {
        return Ok(());
    };
    writeln!(out, "Matrix 2:")?;
    writeln!(out, "{mat2}")?;

    loop {
        writeln!(out, "{}", "Matrix Operation Menu:".bold())?;
        writeln!(out, "1. Matrix Addition")?;
        writeln!(out, "2. Matrix Subtraction")?;
        writeln!(out, "3. Scalar Multiplication")?;
        writeln!(out, "4. Matrix Multiplication")?;
        writeln!(out, "5. Transpose")?;
        writeln!(out, "6. Norm")?;
        writeln!(out, "7. Inverse")?;
        writeln!(out, "8. Eigenvalues")?;
        writeln!(out, "9. Determinant")?;
        writeln!(out, "10. Exit to main menu")?;
        let Some(choice) = prompt_i64(input, out, "Enter your choice: ")? else {
            return Ok(());
        };
        match choice {
            1 => match mat1.add(&mat2) {
                Ok(m) => {
                    writeln!(out, "Matrix Addition Result:")?;
                    writeln!(out, "{m}")?;
                }
                Err(e) => report(err, &e)?,
            },
            2 => match mat1.sub(&mat2) {
                Ok(m) => {
                    writeln!(out, "Matrix Subtraction Result:")?;
                    writeln!(out, "{m}")?;
                }
                Err(e) => report(err, &e)?,
            },
            3 => {
                let Some(scalar) = prompt_i64(input, out, "Enter the scalar value: ")? else {
                    return Ok(());
                };
                writeln!(out, "Scalar Multiplication Result:")?;
                writeln!(out, "{}", mat1.mul_scalar(scalar))?;
            }
            4 => match mat1.matmul(&mat2) {
                Ok(m) => {
                    writeln!(out, "Matrix Multiplication Result:")?;
                    writeln!(out, "{m}")?;
                }
                Err(e) => report(err, &e)?,
            },
            5 => {
                writeln!(out, "Transpose Result:")?;
                writeln!(out, "{}", mat1.transpose())?;
            }
            6 => {
                writeln!(out, "Norm of Matrix 1: {}", mat1.norm())?;
                writeln!(out, "Norm of Matrix 2: {}", mat2.norm())?;
            }
            7 => match mat1.inverse() {
                Ok(m) => {
                    writeln!(out, "Inverse of Matrix 1:")?;
                    writeln!(out, "{m}")?;
                }
                Err(e) => report(err, &e)?,
            },
            8 => {
                match mat1.eigenvalues() {
                    Ok([l1, l2]) => writeln!(out, "Eigenvalues of Matrix 1: {l1} {l2}")?,
                    Err(e) => report(err, &e)?,
                }
                match mat2.eigenvalues() {
                    Ok([l1, l2]) => writeln!(out, "Eigenvalues of Matrix 2: {l1} {l2}")?,
                    Err(e) => report(err, &e)?,
                }
            }
            9 => {
                match mat1.determinant() {
                    Ok(d) => writeln!(out, "Determinant of Matrix 1: {d}")?,
                    Err(e) => report(err, &e)?,
                }
                match mat2.determinant() {
                    Ok(d) => writeln!(out, "Determinant of Matrix 2: {d}")?,
                    Err(e) => report(err, &e)?,
                }
            }
            10 => return Ok(()),
            _ => writeln!(out, "Invalid choice. Please enter a number between 1 and 10.")?,
        }
    }
}

fn vector_menu(
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    let Some(vec1) = read_vector(input, out, "vector 1")? else {
        return Ok(());
    };
    writeln!(out, "Vector 1:")?;
    writeln!(out, "{vec1}")?;
    let Some(vec2) = read_vector(input, out, "vector 2")? else {
        return Ok(());
    };
    writeln!(out, "Vector 2:")?;
    writeln!(out, "{vec2}")?;

    loop {
        writeln!(out, "{}", "Vector Operation Menu:".bold())?;
        writeln!(out, "1. Vector Addition")?;
        writeln!(out, "2. Vector Subtraction")?;
        writeln!(out, "3. Vector Inner Product")?;
        writeln!(out, "4. Exit to main menu")?;
        let Some(choice) = prompt_i64(input, out, "Enter your choice: ")? else {
            return Ok(());
        };
        match choice {
            1 => match vec1.add(&vec2) {
                Ok(v) => {
                    writeln!(out, "Vector Addition Result:")?;
                    writeln!(out, "{v}")?;
                }
                Err(e) => report(err, &e)?,
            },
            2 => match vec1.sub(&vec2) {
                Ok(v) => {
                    writeln!(out, "Vector Subtraction Result:")?;
                    writeln!(out, "{v}")?;
                }
                Err(e) => report(err, &e)?,
            },
            3 => match vec1.dot(&vec2) {
                Ok(p) => {
                    writeln!(out, "Vector Inner Product Result:")?;
                    writeln!(out, "{p}")?;
                }
                Err(e) => report(err, &e)?,
            },
            4 => return Ok(()),
            _ => writeln!(out, "Invalid choice. Please enter a number between 1 and 4.")?,
        }
    }
}

fn read_matrix(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<Matrix<i64>>> {
    let rows_prompt = format!("Enter the number of rows for {label}: ");
    let Some(rows) = prompt_size(input, out, &rows_prompt)? else {
        return Ok(None);
    };
    let cols_prompt = format!("Enter the number of columns for {label}: ");
    let Some(cols) = prompt_size(input, out, &cols_prompt)? else {
        return Ok(None);
    };
    writeln!(out, "Enter elements for {label}:")?;
    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            let prompt = format!("Enter element at position ({i}, {j}): ");
            let Some(value) = prompt_i64(input, out, &prompt)? else {
                return Ok(None);
            };
            data.push(value);
        }
    }
    let matrix = Matrix::from_vec(rows, cols, data).expect("element count matches rows * cols");
    Ok(Some(matrix))
}

fn read_vector(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<Vector<i64>>> {
    let size_prompt = format!("Enter the size of {label}: ");
    let Some(size) = prompt_size(input, out, &size_prompt)? else {
        return Ok(None);
    };
    writeln!(out, "Enter elements for {label}:")?;
    let mut data = Vec::with_capacity(size);
    for i in 0..size {
        let prompt = format!("Enter element at position {i}: ");
        let Some(value) = prompt_i64(input, out, &prompt)? else {
            return Ok(None);
        };
        data.push(value);
    }
    Ok(Some(Vector::from_vec(data)))
}

/// Prompts until a line parses as an integer. `None` means end of input.
fn prompt_i64(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<i64>> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Invalid input. Please enter an integer.")?,
        }
    }
}

fn prompt_size(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<usize>> {
    loop {
        let Some(value) = prompt_i64(input, out, prompt)? else {
            return Ok(None);
        };
        match usize::try_from(value) {
            Ok(size) => return Ok(Some(size)),
            Err(_) => writeln!(out, "Invalid input. Please enter a non-negative integer.")?,
        }
    }
}

fn report(err: &mut impl Write, e: &LinealError) -> io::Result<()> {
    writeln!(err, "{}", e.to_string().as_str().red())
}
