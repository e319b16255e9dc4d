use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use cuentas::{LineOutcome, interpreter::symbol_table::SymbolTable, run_line};

/// cuentas is an interactive calculator for real-valued expressions with
/// variables, mathematical constants and unary functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates the statements of a file line by line instead of reading
    /// from the terminal.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    let mut symbols = SymbolTable::default();

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                         eprintln!("No se ha podido leer el fichero '{}'.", path.display());
                         std::process::exit(1);
                     });
        for line in script.lines() {
            dispatch_line(line, &mut symbols);
        }
        return;
    }

    println!("==========================================================");
    println!("=   Calculadora interactiva                              =");
    println!("=   Escribe 'exit' o 'quit' para salir.                  =");
    println!("==========================================================");

    let stdin = io::stdin();
    loop {
        print!("\nIntroduce la sentencia > ");
        let _ = io::stdout().flush();

        let mut input_line = String::new();
        match stdin.lock().read_line(&mut input_line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = input_line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            println!("Saliendo...");
            break;
        }

        dispatch_line(line, &mut symbols);
    }
}

/// Runs one line and prints its result or its tagged diagnostic.
fn dispatch_line(line: &str, symbols: &mut SymbolTable) {
    if line.is_empty() {
        return;
    }
    match run_line(line, symbols) {
        Ok(LineOutcome::Value(value)) => println!("Resultado: {value}"),
        Ok(LineOutcome::VariableStored(name)) => {
            println!("Variable '{name}' guardada correctamente.");
        },
        Err(error) => {
            let _ = error.print_to(&mut io::stderr());
        },
    }
}
