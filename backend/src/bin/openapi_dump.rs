//! Print the OpenAPI document as JSON.

use std::io::Write;

use clinic_backend::doc::ApiDoc;
use color_eyre::eyre::{Context, Result};
use utoipa::OpenApi;

fn main() -> Result<()> {
    color_eyre::install()?;
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &ApiDoc::openapi())
        .wrap_err("failed to serialise OpenAPI document")?;
    writeln!(stdout).wrap_err("failed to write trailing newline")?;
    Ok(())
}
