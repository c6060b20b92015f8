use dcampaigner_shared::payloads::{
    push_unique, toggle, AdFormat, BidStrategy, BudgetType, FacebookCampaign, FacebookObjective,
    FacebookPlacement, OptimizationGoal, SpecialAdCategory, DEMOGRAPHIC_OPTIONS,
    INTEREST_OPTIONS, TIMEZONES,
};
use yew::prelude::*;

use super::{date_value, edit, parse_date, remove_at, section, wire_values};
use crate::{
    components::{
        form_fields::{
            enum_options, plain_options, CheckboxGroup, NumberField, SelectField, TextArea,
            TextField,
        },
        tabs::Tabs,
        tag_input::TagInput,
    },
    i18n::current::facebook_form as t,
};

const CALLS_TO_ACTION: &[&str] =
    &["Learn More", "Shop Now", "Sign Up", "Contact Us", "Download", "Book Now"];

#[derive(Properties, PartialEq)]
pub struct FacebookFormProps {
    pub value: FacebookCampaign,
    pub on_change: Callback<FacebookCampaign>,
    #[prop_or_default]
    pub disabled: bool,
}

fn time_zone_options() -> Vec<&'static str> {
    std::iter::once("UTC").chain(TIMEZONES.iter().copied()).collect()
}

#[function_component(FacebookForm)]
pub fn facebook_form(props: &FacebookFormProps) -> Html {
    let active_tab = use_state(|| 0usize);
    let value = &props.value;
    let on_change = &props.on_change;
    let disabled = props.disabled;

    let on_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |index: usize| active_tab.set(index))
    };

    let panel = match *active_tab {
        0 => section(
            t::SETTINGS,
            html! {
                <div class="space-y-4">
                    <SelectField
                        label={t::OBJECTIVE}
                        value={value.objective.to_string()}
                        options={enum_options(FacebookObjective::ALL)}
                        on_change={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                            if let Ok(objective) = raw.parse() {
                                c.objective = objective;
                            }
                        })}
                        {disabled}
                    />
                    <p class="text-xs text-[var(--muted)]">
                        { format!("{} {}", t::GOALS, value.objective.goals().join(", ")) }
                    </p>
                    <TextField
                        label={t::NAME}
                        value={value.name.clone()}
                        helper={Some(AttrValue::Static(t::NAME_HELPER))}
                        required=true
                        on_input={edit(value, on_change, |c: &mut FacebookCampaign, name: String| c.name = name)}
                        {disabled}
                    />
                    <SelectField
                        label={t::SPECIAL_CATEGORY}
                        value={value.special_ad_category.to_string()}
                        options={enum_options(SpecialAdCategory::ALL)}
                        on_change={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                            if let Ok(category) = raw.parse() {
                                c.special_ad_category = category;
                            }
                        })}
                        {disabled}
                    />
                </div>
            },
        ),
        1 => section(
            t::AUDIENCE,
            html! {
                <div class="space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <NumberField
                            label={t::MIN_AGE}
                            value={f64::from(value.targeting.age_range.min)}
                            min={13.0}
                            on_change={edit(value, on_change, |c: &mut FacebookCampaign, age: f64| {
                                c.targeting.age_range.min = age as u32;
                            })}
                            {disabled}
                        />
                        <NumberField
                            label={t::MAX_AGE}
                            value={f64::from(value.targeting.age_range.max)}
                            min={13.0}
                            on_change={edit(value, on_change, |c: &mut FacebookCampaign, age: f64| {
                                c.targeting.age_range.max = age as u32;
                            })}
                            {disabled}
                        />
                    </div>
                    <TagInput
                        label={t::LOCATIONS}
                        placeholder={t::LOCATIONS_PLACEHOLDER}
                        values={value.targeting.locations.clone()}
                        on_add={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                            push_unique(&mut c.targeting.locations, &raw);
                        })}
                        on_remove={edit(value, on_change, |c: &mut FacebookCampaign, index: usize| {
                            remove_at(&mut c.targeting.locations, index);
                        })}
                        {disabled}
                    />
                    <CheckboxGroup
                        label={t::INTERESTS}
                        options={plain_options(INTEREST_OPTIONS)}
                        selected={value.targeting.interests.clone()}
                        on_toggle={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                            toggle(&mut c.targeting.interests, raw);
                        })}
                        {disabled}
                    />
                    <CheckboxGroup
                        label={t::DETAILED_TARGETING}
                        options={plain_options(DEMOGRAPHIC_OPTIONS)}
                        selected={value.targeting.demographics.clone()}
                        on_toggle={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                            toggle(&mut c.targeting.demographics, raw);
                        })}
                        {disabled}
                    />
                    <NumberField
                        label={t::AUDIENCE_SIZE}
                        value={value.audience_size.unwrap_or(0) as f64}
                        step={"1000"}
                        on_change={edit(value, on_change, |c: &mut FacebookCampaign, size: f64| {
                            c.audience_size = (size > 0.0).then_some(size as u64);
                        })}
                        {disabled}
                    />
                </div>
            },
        ),
        2 => section(
            t::PLACEMENTS,
            html! {
                <div class="space-y-4">
                    <CheckboxGroup
                        label={t::AD_FORMATS}
                        options={enum_options(AdFormat::ALL)}
                        selected={wire_values(&value.ad_formats)}
                        on_toggle={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                            if let Ok(format) = raw.parse::<AdFormat>() {
                                toggle(&mut c.ad_formats, format);
                            }
                        })}
                        {disabled}
                    />
                    <CheckboxGroup
                        label={t::PLACEMENT}
                        options={enum_options(FacebookPlacement::ALL)}
                        selected={wire_values(&value.placement)}
                        on_toggle={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                            if let Ok(placement) = raw.parse::<FacebookPlacement>() {
                                toggle(&mut c.placement, placement);
                            }
                        })}
                        {disabled}
                    />
                </div>
            },
        ),
        3 => {
            let details = &value.ad_set_details;
            section(
                t::BUDGET_SCHEDULE,
                html! {
                    <div class="grid gap-4 md:grid-cols-2">
                        <SelectField
                            label={t::BUDGET_TYPE}
                            value={details.budget.kind.to_string()}
                            options={enum_options(BudgetType::ALL)}
                            on_change={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                                if let Ok(kind) = raw.parse() {
                                    c.ad_set_details.budget.kind = kind;
                                }
                            })}
                            {disabled}
                        />
                        <NumberField
                            label={t::BUDGET_AMOUNT}
                            value={details.budget.amount}
                            step={"0.01"}
                            prefix={Some(AttrValue::Static("$"))}
                            on_change={edit(value, on_change, |c: &mut FacebookCampaign, amount: f64| {
                                c.ad_set_details.budget.amount = amount;
                            })}
                            {disabled}
                        />
                        <TextField
                            label={t::START_DATE}
                            input_type="date"
                            value={date_value(Some(details.schedule.start_date))}
                            on_input={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                                if let Some(date) = parse_date(&raw) {
                                    c.ad_set_details.schedule.start_date = date;
                                }
                            })}
                            {disabled}
                        />
                        <TextField
                            label={t::END_DATE}
                            input_type="date"
                            value={date_value(details.schedule.end_date)}
                            on_input={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                                c.ad_set_details.schedule.end_date = parse_date(&raw);
                            })}
                            {disabled}
                        />
                        <SelectField
                            label={t::TIME_ZONE}
                            value={details.schedule.time_zone.clone()}
                            options={plain_options(&time_zone_options())}
                            on_change={edit(value, on_change, |c: &mut FacebookCampaign, zone: String| {
                                c.ad_set_details.schedule.time_zone = zone;
                            })}
                            {disabled}
                        />
                        <SelectField
                            label={t::BID_STRATEGY}
                            value={details.optimization.bid_strategy.to_string()}
                            options={enum_options(BidStrategy::ALL)}
                            on_change={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                                if let Ok(strategy) = raw.parse() {
                                    c.ad_set_details.optimization.bid_strategy = strategy;
                                }
                            })}
                            {disabled}
                        />
                        <SelectField
                            label={t::OPTIMIZATION_GOAL}
                            value={details.optimization.optimization_goal.to_string()}
                            options={enum_options(OptimizationGoal::ALL)}
                            on_change={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                                if let Ok(goal) = raw.parse() {
                                    c.ad_set_details.optimization.optimization_goal = goal;
                                }
                            })}
                            {disabled}
                        />
                    </div>
                },
            )
        },
        _ => {
            let creative = &value.creative_details;
            section(
                t::CREATIVE,
                html! {
                    <div class="space-y-4">
                        <SelectField
                            label={t::CREATIVE_FORMAT}
                            value={creative.format.to_string()}
                            options={enum_options(AdFormat::ALL)}
                            on_change={edit(value, on_change, |c: &mut FacebookCampaign, raw: String| {
                                if let Ok(format) = raw.parse() {
                                    c.creative_details.format = format;
                                }
                            })}
                            {disabled}
                        />
                        <TextArea
                            label={t::PRIMARY_TEXT}
                            value={creative.primary_text.clone()}
                            rows={3}
                            on_input={edit(value, on_change, |c: &mut FacebookCampaign, text: String| {
                                c.creative_details.primary_text = text;
                            })}
                            {disabled}
                        />
                        <TextField
                            label={t::HEADLINE}
                            value={creative.headline.clone()}
                            on_input={edit(value, on_change, |c: &mut FacebookCampaign, text: String| {
                                c.creative_details.headline = text;
                            })}
                            {disabled}
                        />
                        <TextField
                            label={t::DESCRIPTION}
                            value={creative.description.clone()}
                            on_input={edit(value, on_change, |c: &mut FacebookCampaign, text: String| {
                                c.creative_details.description = text;
                            })}
                            {disabled}
                        />
                        <SelectField
                            label={t::CALL_TO_ACTION}
                            value={creative.call_to_action.clone()}
                            options={plain_options(CALLS_TO_ACTION)}
                            on_change={edit(value, on_change, |c: &mut FacebookCampaign, cta: String| {
                                c.creative_details.call_to_action = cta;
                            })}
                            {disabled}
                        />
                    </div>
                },
            )
        },
    };

    html! {
        <div class="space-y-4">
            <Tabs
                labels={vec![t::SETTINGS, t::AUDIENCE, t::PLACEMENTS, t::BUDGET_SCHEDULE, t::CREATIVE]}
                active={*active_tab}
                on_select={on_tab}
            />
            { panel }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_leads_the_time_zones() {
        let zones = time_zone_options();
        assert_eq!(zones[0], "UTC");
        assert_eq!(zones.len(), TIMEZONES.len() + 1);
    }
}
