use dcampaigner_shared::payloads::{
    push_unique, toggle, GoogleAdsBidStrategy, GoogleAdsCampaign, GoogleAdsCampaignType,
    TargetDevice,
};
use yew::prelude::*;

use super::{edit, remove_at, section, wire_values};
use crate::{
    components::{
        form_fields::{enum_options, CheckboxGroup, SelectField},
        tag_input::TagInput,
    },
    i18n::current::google_ads_form as t,
};

#[derive(Properties, PartialEq)]
pub struct GoogleAdsFormProps {
    pub value: GoogleAdsCampaign,
    pub on_change: Callback<GoogleAdsCampaign>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(GoogleAdsForm)]
pub fn google_ads_form(props: &GoogleAdsFormProps) -> Html {
    let value = &props.value;
    let on_change = &props.on_change;
    let disabled = props.disabled;
    let targeting = &value.targeting;

    let keywords = if value.campaign_type.uses_keywords() {
        html! {
            <div class="grid gap-4 md:grid-cols-2">
                <TagInput
                    label={t::KEYWORDS}
                    placeholder={t::KEYWORDS_PLACEHOLDER}
                    values={value.keywords.clone()}
                    on_add={edit(value, on_change, |c: &mut GoogleAdsCampaign, raw: String| {
                        push_unique(&mut c.keywords, &raw);
                    })}
                    on_remove={edit(value, on_change, |c: &mut GoogleAdsCampaign, index: usize| {
                        remove_at(&mut c.keywords, index);
                    })}
                    {disabled}
                />
                <TagInput
                    label={t::NEGATIVE_KEYWORDS}
                    placeholder={t::NEGATIVE_KEYWORDS_PLACEHOLDER}
                    values={value.negative_keywords.clone()}
                    on_add={edit(value, on_change, |c: &mut GoogleAdsCampaign, raw: String| {
                        push_unique(&mut c.negative_keywords, &raw);
                    })}
                    on_remove={edit(value, on_change, |c: &mut GoogleAdsCampaign, index: usize| {
                        remove_at(&mut c.negative_keywords, index);
                    })}
                    {disabled}
                />
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="space-y-4">
            { section(t::TITLE, html! {
                <div class="space-y-4">
                    <div class="grid gap-4 md:grid-cols-2">
                        <SelectField
                            label={t::CAMPAIGN_TYPE}
                            value={value.campaign_type.to_string()}
                            options={enum_options(GoogleAdsCampaignType::ALL)}
                            on_change={edit(value, on_change, |c: &mut GoogleAdsCampaign, raw: String| {
                                if let Ok(kind) = raw.parse() {
                                    c.campaign_type = kind;
                                }
                            })}
                            {disabled}
                        />
                        <SelectField
                            label={t::BID_STRATEGY}
                            value={value.bid_strategy.to_string()}
                            options={enum_options(GoogleAdsBidStrategy::ALL)}
                            on_change={edit(value, on_change, |c: &mut GoogleAdsCampaign, raw: String| {
                                if let Ok(strategy) = raw.parse() {
                                    c.bid_strategy = strategy;
                                }
                            })}
                            {disabled}
                        />
                    </div>
                    { keywords }
                </div>
            }) }
            { section(t::TARGETING, html! {
                <div class="space-y-4">
                    <TagInput
                        label={t::LOCATIONS}
                        placeholder={t::LOCATIONS_PLACEHOLDER}
                        values={targeting.locations.clone()}
                        on_add={edit(value, on_change, |c: &mut GoogleAdsCampaign, raw: String| {
                            push_unique(&mut c.targeting.locations, &raw);
                        })}
                        on_remove={edit(value, on_change, |c: &mut GoogleAdsCampaign, index: usize| {
                            remove_at(&mut c.targeting.locations, index);
                        })}
                        {disabled}
                    />
                    <TagInput
                        label={t::LANGUAGES}
                        values={targeting.languages.clone()}
                        on_add={edit(value, on_change, |c: &mut GoogleAdsCampaign, raw: String| {
                            push_unique(&mut c.targeting.languages, &raw);
                        })}
                        on_remove={edit(value, on_change, |c: &mut GoogleAdsCampaign, index: usize| {
                            remove_at(&mut c.targeting.languages, index);
                        })}
                        {disabled}
                    />
                    <CheckboxGroup
                        label={t::DEVICES}
                        options={enum_options(TargetDevice::ALL)}
                        selected={wire_values(&targeting.devices)}
                        on_toggle={edit(value, on_change, |c: &mut GoogleAdsCampaign, raw: String| {
                            if let Ok(device) = raw.parse::<TargetDevice>() {
                                toggle(&mut c.targeting.devices, device);
                            }
                        })}
                        {disabled}
                    />
                </div>
            }) }
        </div>
    }
}
