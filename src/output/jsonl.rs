use serde::Serialize;
use std::io::Write;

/// Stream records to `out` as JSONL, one JSON object per line. Accepts
/// any iterator of serializable records; nothing is buffered beyond the
/// line being written.
pub fn write_jsonl<I>(out: &mut dyn Write, records: I) -> Result<(), String>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    for record in records {
        serde_json::to_writer(&mut *out, &record)
            .map_err(|error| format!("failed to serialize JSON record: {error}"))?;
        out.write_all(b"\n")
            .map_err(|error| format!("failed to write JSONL newline: {error}"))?;
    }

    out.flush()
        .map_err(|error| format!("failed to flush JSONL output: {error}"))?;

    Ok(())
}
