//! Voice channels whose joiners get their own name transformed instead of a pool pick.

use serde::{Deserialize, Serialize};

use crate::{
    model::custom_channel::{AvailableRuleDto, ChannelRuleDto, CustomChannelDto},
    server::{
        error::{custom_channel::CustomChannelError, internal::InternalError, AppError},
        model::nickname_pool::MAX_NICKNAME_LENGTH,
        util::parse::parse_u64_from_string,
    },
};

const UPSIDE_DOWN_FROM: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const UPSIDE_DOWN_TO: &str = "ɐqɔpǝɟƃɥᴉɾʞlɯuodbɹsʇnʌʍxʎz∀qƆpƎℲפHIſʞ˥WNOԀQɹS┴∩ΛMX⅄Z0ƖᄅƐㄣϛ9ㄥ86";

const MIRROR_FROM: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MIRROR_TO: &str = "ɒdɔbɘʇǫʜiįʞlmnoqpɿꙅƚυvwxyzAdƆbƎꟻGHIJʞ⅃MᴎOꟼQЯƧTUVWXYZ";

const LEET_FROM: &str = "aAeEiIoOsStTlL";
const LEET_TO: &str = "44331100$$7711";

/// Rule kinds offered by the dashboard: `(type, label, takes a value)`.
const RULES: &[(&str, &str, bool)] = &[
    ("reverse", "Reverse (Mario → oiraM)", false),
    ("upside_down", "Upside Down (Mario → oᴉɹɐW)", false),
    ("mirror", "Mirror (Mario → oiɿɒM)", false),
    ("leetspeak", "Leetspeak (Mario → M4r10)", false),
    ("sarcastic", "Sarcastic (Mario → mArIo)", false),
    ("uppercase", "UPPERCASE", false),
    ("lowercase", "lowercase", false),
    ("prefix", "Add Prefix", true),
    ("suffix", "Add Suffix", true),
];

/// A single name transformation.
///
/// Serialized with an internal `type` tag so the stored JSON matches the API shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChannelRule {
    Reverse,
    /// Flips letters and digits upside down, read right to left.
    UpsideDown,
    Mirror,
    Leetspeak,
    /// Alternates letter case starting lowercase, non-letters keep their place.
    Sarcastic,
    Uppercase,
    Lowercase,
    Prefix { value: String },
    Suffix { value: String },
}

impl ChannelRule {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Reverse => "reverse",
            Self::UpsideDown => "upside_down",
            Self::Mirror => "mirror",
            Self::Leetspeak => "leetspeak",
            Self::Sarcastic => "sarcastic",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Prefix { .. } => "prefix",
            Self::Suffix { .. } => "suffix",
        }
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::Reverse => name.chars().rev().collect(),
            Self::UpsideDown => translate(name, UPSIDE_DOWN_FROM, UPSIDE_DOWN_TO)
                .chars()
                .rev()
                .collect(),
            Self::Mirror => translate(name, MIRROR_FROM, MIRROR_TO).chars().rev().collect(),
            Self::Leetspeak => translate(name, LEET_FROM, LEET_TO),
            Self::Sarcastic => sarcastic(name),
            Self::Uppercase => name.to_uppercase(),
            Self::Lowercase => name.to_lowercase(),
            Self::Prefix { value } => format!("{} {}", value, name),
            Self::Suffix { value } => format!("{} {}", name, value),
        }
    }

    /// Validates a dashboard rule.
    ///
    /// # Returns
    /// - `Err(CustomChannelError::UnknownRule)` - `type` is not a known rule
    /// - `Err(CustomChannelError::MissingValue)` - prefix or suffix without a non-blank value
    /// - `Err(CustomChannelError::ValueTooLong)` - value longer than a nickname may be
    pub fn from_dto(dto: ChannelRuleDto) -> Result<Self, CustomChannelError> {
        let rule = match dto.kind.as_str() {
            "reverse" => Self::Reverse,
            "upside_down" => Self::UpsideDown,
            "mirror" => Self::Mirror,
            "leetspeak" => Self::Leetspeak,
            "sarcastic" => Self::Sarcastic,
            "uppercase" => Self::Uppercase,
            "lowercase" => Self::Lowercase,
            "prefix" => Self::Prefix {
                value: rule_value(&dto)?,
            },
            "suffix" => Self::Suffix {
                value: rule_value(&dto)?,
            },
            _ => return Err(CustomChannelError::UnknownRule(dto.kind)),
        };

        Ok(rule)
    }

    pub fn into_dto(self) -> ChannelRuleDto {
        let kind = self.kind().to_string();
        let value = match self {
            Self::Prefix { value } | Self::Suffix { value } => Some(value),
            _ => None,
        };

        ChannelRuleDto { kind, value }
    }
}

fn rule_value(dto: &ChannelRuleDto) -> Result<String, CustomChannelError> {
    let value = dto
        .value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| CustomChannelError::MissingValue(dto.kind.clone()))?;

    if value.chars().count() > MAX_NICKNAME_LENGTH {
        return Err(CustomChannelError::ValueTooLong(value.to_string()));
    }

    Ok(value.to_string())
}

/// Replaces every char of `from` by the char at the same position in `to`.
fn translate(name: &str, from: &str, to: &str) -> String {
    name.chars()
        .map(|c| {
            from.chars()
                .position(|candidate| candidate == c)
                .and_then(|index| to.chars().nth(index))
                .unwrap_or(c)
        })
        .collect()
}

fn sarcastic(name: &str) -> String {
    let mut upper = false;
    let mut result = String::with_capacity(name.len());

    for c in name.chars() {
        if c.is_alphabetic() {
            if upper {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            upper = !upper;
        } else {
            result.push(c);
        }
    }

    result
}

/// Every rule kind with its dashboard label.
pub fn available_rules() -> Vec<AvailableRuleDto> {
    RULES
        .iter()
        .map(|(kind, name, has_value)| AvailableRuleDto {
            kind: kind.to_string(),
            name: name.to_string(),
            has_value: *has_value,
        })
        .collect()
}

/// Voice channel with an ordered list of transformation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomChannel {
    pub guild_id: u64,
    pub channel_id: u64,
    /// Channel name at the time of configuration, display only.
    pub name: String,
    pub rules: Vec<ChannelRule>,
}

impl CustomChannel {
    /// A channel without rules falls back to the nickname pool.
    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Runs the rules in order over `display_name`, truncated to the nickname limit.
    pub fn apply(&self, display_name: &str) -> String {
        self.rules
            .iter()
            .fold(display_name.to_string(), |name, rule| rule.apply(&name))
            .chars()
            .take(MAX_NICKNAME_LENGTH)
            .collect()
    }

    /// Serializes the rules for the `rules` column.
    pub fn rules_json(&self) -> String {
        // Serializing plain enums of strings cannot fail.
        serde_json::to_string(&self.rules).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn into_dto(self) -> CustomChannelDto {
        CustomChannelDto {
            channel_id: self.channel_id,
            name: self.name,
            rules: self.rules.into_iter().map(ChannelRule::into_dto).collect(),
        }
    }

    /// # Returns
    /// - `Err(AppError::InternalErr(_))` - A stored ID or the rules JSON failed to parse
    pub fn from_entity(entity: entity::custom_channel::Model) -> Result<Self, AppError> {
        let rules = serde_json::from_str(&entity.rules).map_err(|source| {
            InternalError::ParseRules {
                channel_id: entity.channel_id.clone(),
                source,
            }
        })?;

        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            name: entity.name,
            rules,
        })
    }
}
