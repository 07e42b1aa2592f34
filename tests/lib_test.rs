use assert_cmd::cargo::CommandCargoExt;
use lports::{FileType, ListenerQuery, LportsError, OutputFormat};
use std::process::Command;

fn sample_command(name: &str) -> String {
    let command = Command::cargo_bin(name).unwrap();
    command.get_program().to_string_lossy().into_owned()
}

#[test]
fn listener_query_compact() {
    let records = ListenerQuery::new()
        .command(sample_command("fake-lsof"))
        .execute()
        .unwrap();

    assert_eq!(2, records.len());

    assert_eq!("312", records[0].pid);
    assert_eq!("sshd", records[0].command);
    assert_eq!("root", records[0].user_id);
    assert_eq!(Some(22), records[0].port_number);

    assert_eq!("645", records[1].pid);
    assert_eq!("postgres", records[1].command);
    assert_eq!("_pg", records[1].user_id);
    assert_eq!(Some(5432), records[1].port_number);
}

#[test]
fn listener_query_tagged() {
    let records = ListenerQuery::new()
        .command(sample_command("fake-lsof"))
        .output_format(OutputFormat::Tagged)
        .execute()
        .unwrap();

    assert_eq!(2, records.len());
    assert_eq!("312", records[0].pid);
    assert_eq!("sshd", records[0].command);
    assert_eq!("0", records[0].user_id);
    assert_eq!(Some(22), records[0].port_number);
    assert_eq!(Some(5432), records[1].port_number);
}

#[test]
fn listener_query_with_file_detail() {
    let processes = ListenerQuery::new()
        .command(sample_command("fake-lsof"))
        .output_format(OutputFormat::Tagged)
        .execute_with_files()
        .unwrap();

    assert_eq!(2, processes.len());
    let (record, files) = &processes[0];
    assert_eq!("sshd", record.command);
    assert_eq!(1, files.len());
    assert_eq!("5u", files[0].fd);
    assert_eq!(FileType::Unknown, files[0].file_type);
    assert_eq!("*:22", files[0].name);
}

#[test]
fn file_detail_requires_the_tagged_format() {
    let result = ListenerQuery::new()
        .command(sample_command("fake-lsof"))
        .execute_with_files();

    assert!(matches!(result, Err(LportsError::ConfigurationError(_))));
}

#[test]
fn failing_tool_reports_an_execution_error() {
    let command = sample_command("failing-lsof");

    let err = ListenerQuery::new()
        .command(&command)
        .execute()
        .unwrap_err();

    match err {
        LportsError::Execution {
            command: reported,
            args,
            output,
            ..
        } => {
            assert_eq!(command, reported);
            assert!(args.iter().any(|a| a == "-sTCP:LISTEN"));
            assert!(output.contains("usage"));
        }
        other => panic!("expected an execution error, got {other:?}"),
    }
}

#[test]
fn missing_tool_reports_an_execution_error() {
    let err = ListenerQuery::new()
        .command("lports-no-such-tool")
        .execute()
        .unwrap_err();

    assert!(matches!(err, LportsError::Execution { .. }));
}
