use std::env;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use log::info;

use class_docs_native::docs::{ClassRegistry, build_signature, extract_fragment};
use class_docs_native::logging;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        // Use eprintln for usage info since logger isn't initialized yet
        eprintln!("Usage: {} <descriptors.json> [ClassName]", args[0]);
        eprintln!("  <descriptors.json>: Pre-resolved metadata descriptor document");
        eprintln!("  [ClassName]: Print only this class (default: all classes)");
        process::exit(1);
    }

    // Initialize file logging
    if let Err(e) = logging::init_logger() {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(1);
    }

    info!("Class Docs Native starting");
    info!("Command line arguments: {:?}", args);

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    info!("Class Docs Native finished");
}

fn run(descriptor_path: &str, class_name: Option<&str>) -> Result<()> {
    let registry = ClassRegistry::from_json_file(Path::new(descriptor_path))
        .with_context(|| format!("Failed to load descriptors from {}", descriptor_path))?;

    match class_name {
        Some(name) => print_class(&registry, name)?,
        None => {
            for name in registry.class_names() {
                print_class(&registry, name)?;
            }
            for function in registry.functions() {
                println!("{}", build_signature(function));
            }
        }
    }

    Ok(())
}

/// Print the public signatures of one class, each followed by the member's
/// description fragment when the comment block holds one
fn print_class(registry: &ClassRegistry, class_name: &str) -> Result<()> {
    let class = registry.lookup_class(class_name)?;
    info!("Printing class {} ({} members)", class.name, class.members.len());

    println!("{}", class.name);

    for member in &class.members {
        let signature = build_signature(member);
        if signature.is_empty() {
            // Private member, suppressed from the listing
            continue;
        }
        println!("    {}", signature);

        let comment = member.comment.as_deref().unwrap_or("");
        let description = extract_fragment(comment, "description");
        if let Some(description) = description.as_found() {
            println!("        {}", description);
        }
    }

    Ok(())
}
