use profile_core::validator::ProfileValidator;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: profile_validator <path/to/canonical_profile.json>");
        std::process::exit(2);
    }
    let raw = match std::fs::read_to_string(&args[1]) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("cannot read {}: {}", args[1], e);
            std::process::exit(2);
        }
    };

    let v = ProfileValidator::new();
    match v.validate_json(&raw) {
        Ok(summary) => {
            for c in &summary.checks {
                println!("CHECK {} {} {} {}", c.check_id, c.severity, c.result, c.message);
            }
            println!("OVERALL {}", summary.overall);
            if summary.overall == "PASS" {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("validator error: {}", e);
            std::process::exit(1);
        }
    }
}
