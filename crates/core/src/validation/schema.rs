//! Validation schemas for the campaign entities.
//!
//! Field names match the serialized (snake_case) record fields. Messages
//! are i18n keys resolved by the host application.

use super::rules::FieldRule;

pub const NOT_EMPTY_MESSAGE: &str = "portal.validation.message.notEmpty";

pub const CAMPAIGN_RULES: &[FieldRule] = &[
    FieldRule::required(
        "code_campaign",
        "campaign.validation.campaign.CodeCampaign.notEmpty",
    ),
    FieldRule::max_length(
        "code_campaign",
        50,
        "campaign.validation.campaign.CodeCampaign.size",
    ),
    FieldRule::required("title", "campaign.validation.campaign.Title.notEmpty"),
    FieldRule::max_length("title", 255, "campaign.validation.campaign.Title.size"),
    FieldRule::required(
        "description",
        "campaign.validation.campaign.Description.notEmpty",
    ),
];

/// Date ordering (`starting_date < ending_date`) is deliberately absent.
pub const PHASE_RULES: &[FieldRule] = &[
    FieldRule::not_null("starting_date", NOT_EMPTY_MESSAGE),
    FieldRule::not_null("ending_date", NOT_EMPTY_MESSAGE),
    FieldRule::required("label", "campaign.validation.phase.Label.notEmpty"),
    FieldRule::max_length("label", 255, "campaign.validation.phase.Label.size"),
];

pub const THEME_RULES: &[FieldRule] = &[
    FieldRule::required("title", "campaign.validation.theme.Title.notEmpty"),
    FieldRule::max_length("title", 255, "campaign.validation.theme.Title.size"),
    FieldRule::required(
        "description",
        "campaign.validation.theme.Description.notEmpty",
    ),
    FieldRule::max_length("front_rgb", 255, "campaign.validation.theme.FrontRgb.size"),
];
