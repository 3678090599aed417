use ortx::Discovery;
use std::io::{self, Write};

/// Human-readable rendering of a discovery snapshot.
pub(crate) fn write_text(out: &mut impl Write, discovery: &Discovery) -> io::Result<()> {
    writeln!(out, "domain:   {}", discovery.domain)?;
    writeln!(out, "sources:  {}", discovery.sources.names().join(", "))?;
    writeln!(out, "features: {}", list_or_none(ortx::features::ENABLED))?;

    let script = &discovery.script;
    writeln!(
        out,
        "script:   {} (was {})",
        state(script.enabled),
        state(script.previously_enabled)
    )?;
    writeln!(out, "operators: {}", script.ops.len())?;
    for op in &script.ops {
        writeln!(
            out,
            "  {}  ({}) -> ({})",
            op.key(),
            join(op.inputs.iter()),
            join(op.outputs.iter())
        )?;
    }
    Ok(())
}

pub(crate) fn write_json(out: &mut impl Write, discovery: &Discovery) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, discovery)?;
    writeln!(out)
}

const fn state(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

fn list_or_none(items: &[&str]) -> String {
    if items.is_empty() { "none".to_owned() } else { items.join(", ") }
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}
