use dcampaigner_shared::payloads::{
    normalize_hashtag, push_unique, toggle, InstagramCampaign, InstagramFormat,
    InstagramObjective, INTEREST_OPTIONS,
};
use yew::prelude::*;

use super::{edit, remove_at, section};
use crate::{
    components::{
        form_fields::{enum_options, plain_options, CheckboxGroup, NumberField, SelectField, Toggle},
        tag_input::TagInput,
    },
    i18n::current::instagram_form as t,
};

#[derive(Properties, PartialEq)]
pub struct InstagramFormProps {
    pub value: InstagramCampaign,
    pub on_change: Callback<InstagramCampaign>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Adds a hashtag typed with or without its `#`. Returns whether it was new.
fn add_hashtag(tags: &mut Vec<String>, raw: &str) -> bool {
    push_unique(tags, normalize_hashtag(raw))
}

#[function_component(InstagramForm)]
pub fn instagram_form(props: &InstagramFormProps) -> Html {
    let value = &props.value;
    let on_change = &props.on_change;
    let disabled = props.disabled;
    let targeting = &value.targeting;

    html! {
        <div class="space-y-4">
            { section(t::TITLE, html! {
                <div class="grid gap-4 md:grid-cols-2">
                    <SelectField
                        label={t::OBJECTIVE}
                        value={value.objective.to_string()}
                        options={enum_options(InstagramObjective::ALL)}
                        on_change={edit(value, on_change, |c: &mut InstagramCampaign, raw: String| {
                            if let Ok(objective) = raw.parse() {
                                c.objective = objective;
                            }
                        })}
                        {disabled}
                    />
                    <SelectField
                        label={t::FORMAT}
                        value={value.format.to_string()}
                        options={enum_options(InstagramFormat::ALL)}
                        on_change={edit(value, on_change, |c: &mut InstagramCampaign, raw: String| {
                            if let Ok(format) = raw.parse() {
                                c.format = format;
                            }
                        })}
                        {disabled}
                    />
                </div>
            }) }
            { section(t::AUDIENCE, html! {
                <div class="space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <NumberField
                            label={t::MIN_AGE}
                            value={f64::from(targeting.age_range.min)}
                            min={13.0}
                            on_change={edit(value, on_change, |c: &mut InstagramCampaign, age: f64| {
                                c.targeting.age_range.min = age as u32;
                            })}
                            {disabled}
                        />
                        <NumberField
                            label={t::MAX_AGE}
                            value={f64::from(targeting.age_range.max)}
                            min={13.0}
                            on_change={edit(value, on_change, |c: &mut InstagramCampaign, age: f64| {
                                c.targeting.age_range.max = age as u32;
                            })}
                            {disabled}
                        />
                    </div>
                    <TagInput
                        label={t::LOCATIONS}
                        placeholder={t::LOCATIONS_PLACEHOLDER}
                        values={targeting.locations.clone()}
                        on_add={edit(value, on_change, |c: &mut InstagramCampaign, raw: String| {
                            push_unique(&mut c.targeting.locations, &raw);
                        })}
                        on_remove={edit(value, on_change, |c: &mut InstagramCampaign, index: usize| {
                            remove_at(&mut c.targeting.locations, index);
                        })}
                        {disabled}
                    />
                    <TagInput
                        label={t::HASHTAGS}
                        placeholder={t::HASHTAGS_PLACEHOLDER}
                        chip_prefix="#"
                        values={targeting.hashtags.clone()}
                        on_add={edit(value, on_change, |c: &mut InstagramCampaign, raw: String| {
                            add_hashtag(&mut c.targeting.hashtags, &raw);
                        })}
                        on_remove={edit(value, on_change, |c: &mut InstagramCampaign, index: usize| {
                            remove_at(&mut c.targeting.hashtags, index);
                        })}
                        {disabled}
                    />
                    <CheckboxGroup
                        label={t::INTERESTS}
                        options={plain_options(INTEREST_OPTIONS)}
                        selected={targeting.interests.clone()}
                        on_toggle={edit(value, on_change, |c: &mut InstagramCampaign, raw: String| {
                            toggle(&mut c.targeting.interests, raw);
                        })}
                        {disabled}
                    />
                    <Toggle
                        label={t::INFLUENCER}
                        checked={value.influencer_collaboration}
                        on_change={edit(value, on_change, |c: &mut InstagramCampaign, on: bool| {
                            c.influencer_collaboration = on;
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
    fn hashtags_are_stored_without_prefix_and_deduplicated() {
        let mut tags = Vec::new();
        assert!(add_hashtag(&mut tags, "#summer"));
        assert!(!add_hashtag(&mut tags, "summer"));
        assert!(add_hashtag(&mut tags, " ##sale"));
        assert_eq!(tags, vec!["summer", "sale"]);
    }
}
