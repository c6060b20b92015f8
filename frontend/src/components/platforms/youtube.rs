use dcampaigner_shared::payloads::{
    push_unique, toggle, VideoDetails, YouTubeAdFormat, YouTubeCampaign, YouTubePlacement,
    AGE_GROUPS, GENDERS, INTEREST_OPTIONS,
};
use yew::prelude::*;

use super::{edit, remove_at, section, wire_values};
use crate::{
    components::{
        form_fields::{enum_options, plain_options, CheckboxGroup, NumberField, SelectField},
        tag_input::TagInput,
    },
    i18n::current::youtube_form as t,
};

#[derive(Properties, PartialEq)]
pub struct YouTubeFormProps {
    pub value: YouTubeCampaign,
    pub on_change: Callback<YouTubeCampaign>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Switches the ad format. Only skippable ads keep a skip time; bumpers are
/// capped at six seconds.
fn set_format(campaign: &mut YouTubeCampaign, format: YouTubeAdFormat) {
    campaign.ad_format = format;
    let details = campaign.video_details.get_or_insert(VideoDetails {
        duration: 30,
        skip_time: None,
    });
    match format {
        YouTubeAdFormat::Skippable => {
            details.skip_time.get_or_insert(5);
        },
        YouTubeAdFormat::Bumper => {
            details.duration = details.duration.min(6);
            details.skip_time = None;
        },
        YouTubeAdFormat::NonSkippable | YouTubeAdFormat::Discovery => details.skip_time = None,
    }
}

#[function_component(YouTubeForm)]
pub fn youtube_form(props: &YouTubeFormProps) -> Html {
    let value = &props.value;
    let on_change = &props.on_change;
    let disabled = props.disabled;
    let targeting = &value.targeting;
    let details = value.video_details.unwrap_or(VideoDetails {
        duration: 30,
        skip_time: None,
    });

    html! {
        <div class="space-y-4">
            { section(t::TITLE, html! {
                <div class="space-y-4">
                    <SelectField
                        label={t::AD_FORMAT}
                        value={value.ad_format.to_string()}
                        options={enum_options(YouTubeAdFormat::ALL)}
                        on_change={edit(value, on_change, |c: &mut YouTubeCampaign, raw: String| {
                            if let Ok(format) = raw.parse() {
                                set_format(c, format);
                            }
                        })}
                        {disabled}
                    />
                    <CheckboxGroup
                        label={t::PLACEMENTS}
                        options={enum_options(YouTubePlacement::ALL)}
                        selected={wire_values(&value.placement)}
                        on_toggle={edit(value, on_change, |c: &mut YouTubeCampaign, raw: String| {
                            if let Ok(placement) = raw.parse::<YouTubePlacement>() {
                                toggle(&mut c.placement, placement);
                            }
                        })}
                        {disabled}
                    />
                    <div class="grid grid-cols-2 gap-4">
                        <NumberField
                            label={t::DURATION}
                            value={f64::from(details.duration)}
                            min={1.0}
                            on_change={edit(value, on_change, |c: &mut YouTubeCampaign, secs: f64| {
                                let details = c.video_details.get_or_insert(VideoDetails {
                                    duration: 30,
                                    skip_time: None,
                                });
                                details.duration = secs as u32;
                            })}
                            {disabled}
                        />
                        if value.ad_format == YouTubeAdFormat::Skippable {
                            <NumberField
                                label={t::SKIP_TIME}
                                value={f64::from(details.skip_time.unwrap_or(5))}
                                on_change={edit(value, on_change, |c: &mut YouTubeCampaign, secs: f64| {
                                    if let Some(details) = c.video_details.as_mut() {
                                        details.skip_time = Some(secs as u32);
                                    }
                                })}
                                {disabled}
                            />
                        }
                    </div>
                </div>
            }) }
            { section(t::AUDIENCE, html! {
                <div class="space-y-4">
                    <CheckboxGroup
                        label={t::AGE_GROUPS}
                        options={plain_options(AGE_GROUPS)}
                        selected={targeting.demographics.age.clone()}
                        on_toggle={edit(value, on_change, |c: &mut YouTubeCampaign, raw: String| {
                            toggle(&mut c.targeting.demographics.age, raw);
                        })}
                        {disabled}
                    />
                    <CheckboxGroup
                        label={t::GENDERS}
                        options={plain_options(GENDERS)}
                        selected={targeting.demographics.gender.clone()}
                        on_toggle={edit(value, on_change, |c: &mut YouTubeCampaign, raw: String| {
                            toggle(&mut c.targeting.demographics.gender, raw);
                        })}
                        {disabled}
                    />
                    <TagInput
                        label={t::KEYWORDS}
                        placeholder={t::KEYWORDS_PLACEHOLDER}
                        values={targeting.keywords.clone()}
                        on_add={edit(value, on_change, |c: &mut YouTubeCampaign, raw: String| {
                            push_unique(&mut c.targeting.keywords, &raw);
                        })}
                        on_remove={edit(value, on_change, |c: &mut YouTubeCampaign, index: usize| {
                            remove_at(&mut c.targeting.keywords, index);
                        })}
                        {disabled}
                    />
                    <TagInput
                        label={t::TOPICS}
                        values={targeting.topics.clone()}
                        on_add={edit(value, on_change, |c: &mut YouTubeCampaign, raw: String| {
                            push_unique(&mut c.targeting.topics, &raw);
                        })}
                        on_remove={edit(value, on_change, |c: &mut YouTubeCampaign, index: usize| {
                            remove_at(&mut c.targeting.topics, index);
                        })}
                        {disabled}
                    />
                    <CheckboxGroup
                        label={t::INTERESTS}
                        options={plain_options(INTEREST_OPTIONS)}
                        selected={targeting.interests.clone()}
                        on_toggle={edit(value, on_change, |c: &mut YouTubeCampaign, raw: String| {
                            toggle(&mut c.targeting.interests, raw);
                        })}
                        {disabled}
                    />
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bumper_caps_duration_and_drops_skip() {
        let mut campaign = YouTubeCampaign::default();
        set_format(&mut campaign, YouTubeAdFormat::Bumper);
        assert_eq!(
            campaign.video_details,
            Some(VideoDetails {
                duration: 6,
                skip_time: None
            })
        );
    }

    #[test]
    fn skippable_restores_default_skip_time() {
        let mut campaign = YouTubeCampaign::default();
        set_format(&mut campaign, YouTubeAdFormat::NonSkippable);
        set_format(&mut campaign, YouTubeAdFormat::Skippable);
        assert_eq!(campaign.video_details.and_then(|d| d.skip_time), Some(5));
    }
}
