use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::{ContentArrangement, Table};
use qiimp_core::{SchemaTranslator, build_schema};
use qiimp_model::{FieldDefinition, ValidationSchema};
use qiimp_standards::Vocabulary;
use tracing::{info, info_span};

/// Load the vocabulary file, or the built-in vocabulary when none is given.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary> {
    match path {
        Some(path) => {
            let vocabulary = Vocabulary::load(path)
                .with_context(|| format!("load vocabulary {}", path.display()))?;
            info!(path = %path.display(), "loaded vocabulary");
            Ok(vocabulary)
        }
        None => Ok(Vocabulary::default()),
    }
}

/// Parse a JSON array of field definitions.
pub fn parse_fields(text: &str) -> Result<Vec<FieldDefinition>> {
    serde_json::from_str(text).context("field definitions must be a JSON array of objects")
}

/// Assemble a schema from field definitions JSON text.
pub fn build_from_json(text: &str, vocabulary: &Vocabulary) -> Result<ValidationSchema> {
    let fields = parse_fields(text)?;
    let translator = SchemaTranslator::new(vocabulary);
    let schema = build_schema(&translator, &fields).context("build validation schema")?;
    Ok(schema)
}

pub fn render_schema(schema: &ValidationSchema, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(schema)
    } else {
        serde_json::to_string_pretty(schema)
    };
    rendered.context("serialize validation schema")
}

pub fn run_build(
    fields_path: &Path,
    output: Option<&Path>,
    vocabulary_path: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let span = info_span!("build", fields = %fields_path.display());
    let _guard = span.enter();

    let vocabulary = load_vocabulary(vocabulary_path)?;
    let text = fs::read_to_string(fields_path)
        .with_context(|| format!("read {}", fields_path.display()))?;
    let schema = build_from_json(&text, &vocabulary)?;
    let rendered = render_schema(&schema, compact)?;

    match output {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), field_count = schema.len(), "schema written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

pub fn sentinel_table(vocabulary: &Vocabulary) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Literal"]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    for sentinel in vocabulary.missing_values.iter() {
        table.add_row(vec![sentinel.name.as_str(), sentinel.value.as_str()]);
    }
    table
}

pub fn run_sentinels(vocabulary_path: Option<&Path>) -> Result<()> {
    let vocabulary = load_vocabulary(vocabulary_path)?;
    println!("{}", sentinel_table(&vocabulary));
    Ok(())
}
