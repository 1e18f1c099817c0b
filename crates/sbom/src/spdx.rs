//! SPDX 2.3 JSON document model
//!
//! Serde model for the subset of [SPDX](https://spdx.dev/) 2.3 this tool
//! produces and redacts: one described package, the scanned file
//! inventory, and the relationships tying them together. The model is
//! deserializable as well so the redactor can round-trip documents.

use serde::{Deserialize, Serialize};

/// SPDX identifier of the document itself.
pub const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";

/// SPDX identifier of the single described package.
pub const ROOT_PACKAGE_SPDX_ID: &str = "SPDXRef-RootPackage";

/// Prefix shared by every per-file SPDX identifier.
pub const FILE_SPDX_ID_PREFIX: &str = "SPDXRef-File-";

/// SPDX 2.3 document root.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxDocument {
    pub spdx_version: String,
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    pub data_license: String,
    pub document_namespace: String,
    pub creation_info: SpdxCreationInfo,
    #[serde(default)]
    pub document_describes: Vec<String>,
    pub packages: Vec<SpdxPackage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<SpdxFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<SpdxRelationship>,
}

/// Creation metadata.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxCreationInfo {
    pub created: String,
    pub creators: Vec<String>,
}

/// The described package.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxPackage {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    pub version_info: String,
    pub supplier: String,
    pub download_location: String,
    pub files_analyzed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_files: Vec<String>,
}

/// One scanned file with its checksum.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxFile {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub file_name: String,
    pub checksums: Vec<SpdxChecksum>,
}

/// Checksum of a file or package.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxChecksum {
    pub algorithm: String,
    pub checksum_value: String,
}

/// Relationship between two SPDX elements.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxRelationship {
    pub spdx_element_id: String,
    pub relationship_type: String,
    pub related_spdx_element: String,
}

impl SpdxRelationship {
    /// True when either end of the relationship is a file element.
    pub fn involves_file(&self) -> bool {
        self.spdx_element_id.starts_with(FILE_SPDX_ID_PREFIX)
            || self.related_spdx_element.starts_with(FILE_SPDX_ID_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_spdx_field_names() {
        let doc = SpdxDocument {
            spdx_version: "SPDX-2.3".to_owned(),
            spdx_id: DOCUMENT_SPDX_ID.to_owned(),
            name: "demo".to_owned(),
            data_license: "CC0-1.0".to_owned(),
            document_namespace: "https://bompack.dev/spdx/test".to_owned(),
            creation_info: SpdxCreationInfo {
                created: "2026-01-01T00:00:00Z".to_owned(),
                creators: vec!["Tool: bompack".to_owned()],
            },
            document_describes: vec![ROOT_PACKAGE_SPDX_ID.to_owned()],
            packages: vec![],
            files: vec![],
            relationships: vec![],
        };

        let json = serde_json::to_string(&doc).expect("serialize");
        assert!(json.contains("\"spdxVersion\""));
        assert!(json.contains("\"SPDXID\""));
        assert!(json.contains("\"documentNamespace\""));
        // Empty file inventory and relationships are omitted entirely.
        assert!(!json.contains("\"files\""));
        assert!(!json.contains("\"relationships\""));
    }

    #[test]
    fn deserializes_document_without_files() {
        let json = r#"{
            "spdxVersion": "SPDX-2.3",
            "SPDXID": "SPDXRef-DOCUMENT",
            "name": "demo",
            "dataLicense": "CC0-1.0",
            "documentNamespace": "https://bompack.dev/spdx/x",
            "creationInfo": {"created": "2026-01-01T00:00:00Z", "creators": []},
            "packages": []
        }"#;
        let doc: SpdxDocument = serde_json::from_str(json).expect("deserialize");
        assert!(doc.files.is_empty());
        assert!(doc.document_describes.is_empty());
    }

    #[test]
    fn relationship_file_detection() {
        let rel = SpdxRelationship {
            spdx_element_id: ROOT_PACKAGE_SPDX_ID.to_owned(),
            relationship_type: "CONTAINS".to_owned(),
            related_spdx_element: "SPDXRef-File-0".to_owned(),
        };
        assert!(rel.involves_file());

        let rel = SpdxRelationship {
            spdx_element_id: DOCUMENT_SPDX_ID.to_owned(),
            relationship_type: "DESCRIBES".to_owned(),
            related_spdx_element: ROOT_PACKAGE_SPDX_ID.to_owned(),
        };
        assert!(!rel.involves_file());
    }
}
