// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
     _                     _
  __| | ___  __ _ ___  ___ | |_   _____
 / _` |/ _ \/ _` / __|/ _ \| \ \ / / _ \
| (_| |  __/ (_| \__ \ (_) | |\ V /  __/
 \__,_|\___|\__, |___/\___/|_| \_/ \___|
               |_|

    AI Differential Equation Solver
"#;
    println!("{}", banner);
}
