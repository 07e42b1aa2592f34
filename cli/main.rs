use comfy_table::{Cell, Table};
use lports::{ListenerQuery, OutputFormat, ProcessRecord};

fn main() {
    env_logger::init();

    let format = match std::env::args().nth(1).as_deref() {
        None => OutputFormat::Compact,
        Some("--tagged") => OutputFormat::Tagged,
        Some("-h") | Some("--help") => {
            println!("Usage: lports [--tagged]");
            println!();
            println!("List the processes holding listening TCP sockets.");
            println!("  --tagged    use lsof's field-tagged output layout");
            return;
        }
        Some(other) => {
            eprintln!("Unknown option '{other}', try --help");
            std::process::exit(2);
        }
    };

    match ListenerQuery::new().output_format(format).execute() {
        Ok(records) => {
            println!("{}", render(&records));
        }
        Err(e) => {
            eprintln!("Failed with error - {e}");
            std::process::exit(1);
        }
    }
}

fn render(records: &[ProcessRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(["PID", "Command", "UserID", "PortNumber"]);
    for record in records {
        table.add_row([
            Cell::new(&record.pid),
            Cell::new(&record.command),
            Cell::new(&record.user_id),
            Cell::new(
                record
                    .port_number
                    .map(|port| port.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
    }
    table
}
