use super::{
    config::Config,
    error::Error,
    policy::{ExtractionPolicy, RemovePolicy},
    types::{AttributeValue, ChangeNotification, EventName, Image, OutputRecord},
};

use std::collections::BTreeMap;
use tracing::{info, warn};

/// Map one change notification to the record to publish, if any.
///
/// `INSERT` and `MODIFY` read the new image, `REMOVE` reads the old one. A missing image,
/// a missing identifier or an attribute that is not a string fails the whole notification.
pub fn transform(
    config: &Config,
    notification: &ChangeNotification,
) -> Result<Option<OutputRecord>, Error> {
    let event_name = notification.event_name;
    let image = select_image(notification)?;

    if event_name == EventName::Remove && config.remove_policy() == RemovePolicy::Skip {
        let event_id = notification.event_id.as_deref().unwrap_or_default();
        match image.get(config.identifier_attribute()) {
            Some(AttributeValue::S(id)) => info!(event_id, "Skip REMOVE of `{id}`"),
            _ => warn!(
                event_id,
                "Skip REMOVE without a string `{}` attribute",
                config.identifier_attribute(),
            ),
        }
        return Ok(None);
    }

    extract(config, event_name, image).map(Some)
}

fn select_image(notification: &ChangeNotification) -> Result<&Image, Error> {
    let event_name = notification.event_name;
    let (image, label) = match event_name {
        EventName::Insert | EventName::Modify => {
            (notification.dynamodb.new_image.as_ref(), "NewImage")
        }
        EventName::Remove => (notification.dynamodb.old_image.as_ref(), "OldImage"),
    };

    image.ok_or(Error::MissingImage {
        event_name: event_name.as_str(),
        image: label,
    })
}

fn extract(config: &Config, event_name: EventName, image: &Image) -> Result<OutputRecord, Error> {
    let id_attr = config.identifier_attribute();
    let partition_key = image
        .get(id_attr)
        .ok_or_else(|| Error::MissingAttribute(id_attr.to_string()))
        .and_then(|val| string_value(id_attr, val))?;

    let mut fields = match config.extraction_policy() {
        ExtractionPolicy::FullImage => image
            .iter()
            .map(|(name, val)| string_value(name, val).map(|s| (name.clone(), s)))
            .collect::<Result<BTreeMap<String, String>, Error>>()?,
        ExtractionPolicy::IdentifierOnly => {
            BTreeMap::from([(id_attr.to_string(), partition_key.clone())])
        }
    };
    fields.insert(
        config.event_attribute().to_string(),
        event_name.as_str().to_string(),
    );

    Ok(OutputRecord::new(partition_key, fields))
}

fn string_value(name: &str, value: &AttributeValue) -> Result<String, Error> {
    match value {
        AttributeValue::S(val) => Ok(val.clone()),
        other => Err(Error::UnsupportedAttribute {
            name: name.to_string(),
            tag: type_marker(other),
        }),
    }
}

fn type_marker(value: &AttributeValue) -> &'static str {
    #[allow(unreachable_patterns)]
    match value {
        AttributeValue::S(_) => "S",
        AttributeValue::N(_) => "N",
        AttributeValue::B(_) => "B",
        AttributeValue::Bool(_) => "BOOL",
        AttributeValue::Null(_) => "NULL",
        AttributeValue::Ss(_) => "SS",
        AttributeValue::Ns(_) => "NS",
        AttributeValue::Bs(_) => "BS",
        AttributeValue::L(_) => "L",
        AttributeValue::M(_) => "M",
        _ => "unknown",
    }
}
