// Prints partial output and exits non-zero, standing in for a broken lsof in
// the integration tests.
fn main() {
    println!("lsof: unsupported option, usage: lsof [-i] [-n] [-P]");
    std::process::exit(2);
}
