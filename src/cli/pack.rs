use potext::{PackOptions, PackResult, PotextError};

pub(crate) fn run(opts: &PackOptions) -> i32 {
    println!("Packing Pot translation plugin...");
    println!("{}", "-".repeat(40));

    match potext::pack(opts) {
        Ok(result) => {
            report_success(&result);
            0
        }
        Err(e) => {
            report_failure(&e);
            1
        }
    }
}

fn report_success(result: &PackResult) {
    for member in &result.archive.members {
        println!("added: {} ({} bytes)", member.name, member.size);
    }
    let name = result.info.display.as_deref().unwrap_or(result.info.id.as_str());
    println!();
    println!("Packed {name} successfully");
    println!("output: {}", result.output_path().display());
    println!("size: {} bytes", result.archive.size);
}

fn report_failure(err: &PotextError) {
    match err {
        PotextError::MissingFiles { files } => {
            println!("The following files do not exist:");
            for f in files {
                println!("  {f}");
            }
        }
        other => println!("{other}"),
    }
    println!();
    println!("Packing failed!");
}
