//! Normalize command implementation.

use crate::cli::{NormalizeArgs, SchemaArg};
use crate::error::{CliError, Result};
use crate::input::{read_source, read_text};
use crate::output::Formatter;
use nexh_domain::{FieldSpec, ResponseSchema};
use nexh_prompt::{map_fields, normalize};

/// Execute the normalize command.
pub fn execute_normalize(args: NormalizeArgs, formatter: &Formatter) -> Result<()> {
    let schema = schema_for(args.schema, &args.keys)?;
    let reply = match args.file.as_deref() {
        Some(path) => read_source(path)?,
        None => read_text(None)?,
    };

    let result = normalize(&reply, &schema);
    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Build the reply schema selected on the command line.
pub fn schema_for(schema: SchemaArg, keys: &[String]) -> Result<ResponseSchema> {
    match schema {
        SchemaArg::Analysis => Ok(ResponseSchema::analysis()),
        SchemaArg::Briefing => Ok(ResponseSchema::briefing()),
        SchemaArg::Fields => {
            if keys.is_empty() {
                return Err(CliError::InvalidInput(
                    "--schema fields requires --keys".to_string(),
                ));
            }
            let spec: Vec<FieldSpec> = keys
                .iter()
                .map(|k| FieldSpec::new(k.as_str(), k.as_str()))
                .collect();
            Ok(map_fields(&spec)?.schema())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_for_fixed_templates() {
        assert_eq!(schema_for(SchemaArg::Analysis, &[]).unwrap(), ResponseSchema::analysis());
        assert_eq!(schema_for(SchemaArg::Briefing, &[]).unwrap(), ResponseSchema::briefing());
    }

    #[test]
    fn test_schema_for_fields() {
        let keys = vec!["name".to_string(), "phone".to_string()];
        let schema = schema_for(SchemaArg::Fields, &keys).unwrap();
        assert_eq!(schema.required_keys(), ["name", "phone"]);
        assert!(!schema.is_strict());
    }

    #[test]
    fn test_schema_for_fields_requires_keys() {
        assert!(matches!(
            schema_for(SchemaArg::Fields, &[]),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_schema_for_fields_rejects_duplicates() {
        let keys = vec!["name".to_string(), "name".to_string()];
        assert!(matches!(
            schema_for(SchemaArg::Fields, &keys),
            Err(CliError::Prompt(_))
        ));
    }
}
