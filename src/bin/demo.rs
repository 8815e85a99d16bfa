use ir_national_code::validate;

const SAMPLE: &str = "6587452158";

fn verdict_line(input: &str) -> String {
    format!("{}: {}", input, validate(input))
}

fn main() {
    println!("{}", verdict_line(SAMPLE));
}
