use crate::options::ConvertOptions;
use crate::traits::EventConverter;
use crate::yunhu::YunhuConverter;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: &'static str,
    pub description: &'static str,
    /// Value written to `platform` in normalized events
    pub platform: &'static str,
}

const PROVIDERS: &[ProviderMetadata] = &[ProviderMetadata {
    name: "yunhu",
    description: "Yunhu bot webhook events",
    platform: crate::yunhu::PLATFORM,
}];

pub fn get_all_providers() -> &'static [ProviderMetadata] {
    PROVIDERS
}

pub fn get_provider_names() -> Vec<&'static str> {
    PROVIDERS.iter().map(|p| p.name).collect()
}

pub fn get_provider_metadata(name: &str) -> Option<&'static ProviderMetadata> {
    PROVIDERS.iter().find(|p| p.name == name)
}

/// Create a converter by provider name
pub fn create_converter(name: &str, options: ConvertOptions) -> Result<Box<dyn EventConverter>> {
    match name {
        "yunhu" => Ok(Box::new(YunhuConverter::new(options))),
        _ => Err(Error::Provider(format!("Unknown provider: {}", name))),
    }
}

/// Create converters for every registered provider
pub fn create_all_converters(options: &ConvertOptions) -> Vec<Box<dyn EventConverter>> {
    PROVIDERS
        .iter()
        .filter_map(|p| create_converter(p.name, options.clone()).ok())
        .collect()
}
