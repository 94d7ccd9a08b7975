//! Command handlers.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use namesilo_provider::{DnsRecordProvider, Record};

use crate::cli::{Command, MutateArgs, RecordArgs};

pub async fn dispatch(command: Command, provider: &dyn DnsRecordProvider) -> Result<()> {
    let (records, json) = match command {
        Command::List(args) => (provider.get_records(&args.zone).await?, args.json),
        Command::Append(args) => {
            let input = input_records(&args)?;
            (provider.append_records(&args.zone, &input).await?, args.json)
        }
        Command::Set(args) => {
            let input = input_records(&args)?;
            (provider.set_records(&args.zone, &input).await?, args.json)
        }
        Command::Delete(args) => {
            let input = input_records(&args)?;
            (provider.delete_records(&args.zone, &input).await?, args.json)
        }
    };

    let mut out = io::stdout().lock();
    write_records(&mut out, &records, json)?;
    out.flush()?;
    Ok(())
}

fn input_records(args: &MutateArgs) -> Result<Vec<Record>> {
    match &args.file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("{} is not a JSON array of records", path.display()))
        }
        None => Ok(vec![record_from_args(&args.record)?]),
    }
}

fn record_from_args(args: &RecordArgs) -> Result<Record> {
    let record_type = args.record_type.clone().context("--type is required")?;
    let name = args.name.clone().context("--name is required")?;

    let mut record = Record::new(record_type, name, args.value.clone().unwrap_or_default());
    if let Some(ttl) = args.ttl {
        record = record.with_ttl(ttl);
    }
    if let Some(priority) = args.priority {
        record = record.with_priority(priority);
    }
    if let Some(id) = &args.id {
        record = record.with_id(id.clone());
    }
    Ok(record)
}

fn write_records(out: &mut impl Write, records: &[Record], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, records)?;
        writeln!(out)?;
        return Ok(());
    }

    for record in records {
        let name = if record.name.is_empty() {
            "@"
        } else {
            record.name.as_str()
        };
        let id = if record.id.is_empty() {
            "-"
        } else {
            record.id.as_str()
        };
        writeln!(
            out,
            "{id}\t{}\t{name}\t{}\t{}\t{}",
            record.record_type, record.ttl, record.priority, record.value
        )?;
    }
    Ok(())
}
