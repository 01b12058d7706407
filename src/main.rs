use waterjug::solver;

fn main() {
    match solver() {
        Ok(_) => {}
        Err(e) => eprintln!("{}", e),
    }
}
