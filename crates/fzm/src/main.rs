use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    match fzm::default_app().build() {
        Ok(app) => process::exit(i32::from(app.run(&args))),
        Err(err) => {
            // Registry wiring failed before any stream existed; plain
            // stderr is all there is.
            eprintln!("fzm: {}", err);
            process::exit(2);
        }
    }
}
