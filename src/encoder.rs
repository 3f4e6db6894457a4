//! Categorical label encoding for the trained model's integer IDs

use crate::error::{PredictError, Result};
use std::collections::HashMap;

/// Bidirectional mapping between category labels and the dense integer IDs
/// the model was fit against. The vocabulary is closed: it is fixed at
/// training time and unknown labels never map to a default.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    /// Which vocabulary this is ("province" or "commodity"), for error messages
    kind: &'static str,
    /// Labels in ID order
    classes: Vec<String>,
    /// Reverse index from label to ID
    index: HashMap<String, u32>,
}

impl LabelEncoder {
    /// Build an encoder from the training-time vocabulary. IDs are assigned
    /// by position.
    pub fn from_classes(kind: &'static str, classes: Vec<String>) -> Self {
        let index = classes
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id as u32))
            .collect();

        Self {
            kind,
            classes,
            index,
        }
    }

    /// The known labels, in ID order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Map a label to its integer ID. Fails on labels outside the vocabulary.
    pub fn encode(&self, label: &str) -> Result<u32> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| PredictError::UnknownCategory {
                kind: self.kind,
                label: label.to_string(),
            })
    }

    /// Reverse mapping from an integer ID back to its label
    pub fn decode(&self, id: u32) -> Option<&str> {
        self.classes.get(id as usize).map(String::as_str)
    }
}

/// Wraps the two independent encoders the model bundle carries
#[derive(Debug, Clone)]
pub struct CategoryEncoder {
    province: LabelEncoder,
    commodity: LabelEncoder,
}

impl CategoryEncoder {
    /// Assemble from the bundle's province and commodity encoders
    pub fn new(province: LabelEncoder, commodity: LabelEncoder) -> Self {
        Self {
            province,
            commodity,
        }
    }

    /// Convenience constructor from the two raw vocabularies
    pub fn from_vocabularies(provinces: Vec<String>, commodities: Vec<String>) -> Self {
        Self {
            province: LabelEncoder::from_classes("province", provinces),
            commodity: LabelEncoder::from_classes("commodity", commodities),
        }
    }

    /// Province labels known to the model, in ID order
    pub fn known_provinces(&self) -> &[String] {
        self.province.classes()
    }

    /// Commodity labels known to the model, in ID order
    pub fn known_commodities(&self) -> &[String] {
        self.commodity.classes()
    }

    /// Map a province label to its model ID
    pub fn encode_province(&self, label: &str) -> Result<u32> {
        self.province.encode(label)
    }

    /// Map a commodity label to its model ID
    pub fn encode_commodity(&self, label: &str) -> Result<u32> {
        self.commodity.encode(label)
    }

    /// Reverse mapping for province IDs
    pub fn decode_province(&self, id: u32) -> Option<&str> {
        self.province.decode(id)
    }

    /// Reverse mapping for commodity IDs
    pub fn decode_commodity(&self, id: u32) -> Option<&str> {
        self.commodity.decode(id)
    }
}
