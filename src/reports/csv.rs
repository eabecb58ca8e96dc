use super::common::{format_size_mb, format_upload_date};
use crate::Result;
use crate::messages;
use crate::models::Artifact;
use core::fmt::Write;

const HEADER: [&str; 7] = ["Project", "Upload Date", "File Name", "Size (Bytes)", "Size (MB)", "Upload IP", "Messages"];

/// Render pending artifacts as CSV, one record per artifact with its messages.
pub fn generate<W: Write>(artifacts: &[Artifact], writer: &mut W) -> Result<()> {
    let mut csv = ::csv::Writer::from_writer(Vec::new());
    csv.write_record(HEADER)?;

    for artifact in artifacts {
        csv.write_record([
            artifact.display_label(),
            format_upload_date(artifact.upload_date.as_ref()).as_str(),
            artifact.file_name.as_str(),
            artifact.file_size.to_string().as_str(),
            format_size_mb(artifact.file_size).as_str(),
            artifact.upload_ip.as_str(),
            messages::normalize(artifact).as_str(),
        ])?;
    }

    let bytes = csv.into_inner().map_err(|e| e.into_error())?;
    writer.write_str(&String::from_utf8(bytes)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtifactMessages, Message};

    #[test]
    fn test_header_only() {
        let mut output = String::new();
        generate(&[], &mut output).unwrap();
        assert_eq!(output, "Project,Upload Date,File Name,Size (Bytes),Size (MB),Upload IP,Messages\n");
    }

    #[test]
    fn test_quoting() {
        let artifact = Artifact {
            file_name: "a,b.fpr".to_string(),
            file_size: 0,
            upload_ip: "10.0.0.1".to_string(),
            processing_messages: "say \"hi\"".to_string(),
            messages: ArtifactMessages::Entries(vec![Message::new(Some("C"), "m")]),
            project_version_name: Some("P - 1".to_string()),
            ..Artifact::default()
        };

        let mut output = String::new();
        generate(&[artifact], &mut output).unwrap();

        let row = output.lines().skip(1).collect::<Vec<_>>().join("\n");
        assert_eq!(row, "P - 1,,\"a,b.fpr\",0,0.00,10.0.0.1,\"say \"\"hi\"\"\n[C] m\"");
    }

    #[test]
    fn test_messages_always_present() {
        let artifact = Artifact {
            project_version_name: Some("P - 1".to_string()),
            ..Artifact::default()
        };

        let mut output = String::new();
        generate(&[artifact], &mut output).unwrap();
        assert!(output.ends_with(",No processing messages available\n"));
    }
}
