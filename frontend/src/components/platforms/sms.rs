use dcampaigner_shared::payloads::{
    push_unique, MessageType, PhoneNumberType, SmsCampaign, SMS_MAX_LENGTH, TIMEZONES,
};
use yew::prelude::*;

use super::{edit, remove_at, section};
use crate::{
    components::{
        form_fields::{enum_options, plain_options, SelectField, TextArea, TextField, Toggle},
        tag_input::TagInput,
    },
    i18n::{
        current::{message_form as m, sms_form as t},
        fill_two,
    },
};

#[derive(Properties, PartialEq)]
pub struct SmsFormProps {
    pub value: SmsCampaign,
    pub on_change: Callback<SmsCampaign>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Character counter shown under the message box.
fn counter(campaign: &SmsCampaign) -> String {
    fill_two(t::COUNTER, campaign.message_len(), SMS_MAX_LENGTH)
}

#[function_component(SmsForm)]
pub fn sms_form(props: &SmsFormProps) -> Html {
    let value = &props.value;
    let on_change = &props.on_change;
    let disabled = props.disabled;
    let over_limit = value.message_len() > SMS_MAX_LENGTH;

    html! {
        <div class="space-y-4">
            { section(t::TITLE, html! {
                <div class="space-y-4">
                    <TextField
                        label={t::SENDER}
                        value={value.sender.clone()}
                        helper={Some(AttrValue::Static(t::SENDER_HELPER))}
                        required=true
                        on_input={edit(value, on_change, |c: &mut SmsCampaign, text: String| c.sender = text)}
                        {disabled}
                    />
                    <TextArea
                        label={t::MESSAGE}
                        value={value.message.clone()}
                        rows={3}
                        required=true
                        helper={Some(AttrValue::from(counter(value)))}
                        error={over_limit}
                        on_input={edit(value, on_change, |c: &mut SmsCampaign, text: String| c.message = text)}
                        {disabled}
                    />
                    <div class="grid gap-4 md:grid-cols-2">
                        <SelectField
                            label={t::MESSAGE_TYPE}
                            value={value.compliance.message_type.to_string()}
                            options={enum_options(MessageType::ALL)}
                            on_change={edit(value, on_change, |c: &mut SmsCampaign, raw: String| {
                                if let Ok(kind) = raw.parse() {
                                    c.compliance.message_type = kind;
                                }
                            })}
                            {disabled}
                        />
                        <SelectField
                            label={t::PHONE_TYPE}
                            value={value.audience.phone_number_type.to_string()}
                            options={enum_options(PhoneNumberType::ALL)}
                            on_change={edit(value, on_change, |c: &mut SmsCampaign, raw: String| {
                                if let Ok(kind) = raw.parse() {
                                    c.audience.phone_number_type = kind;
                                }
                            })}
                            {disabled}
                        />
                    </div>
                </div>
            }) }
            { section(m::SCHEDULE_AUDIENCE, html! {
                <div class="space-y-4">
                    <div class="grid gap-4 md:grid-cols-2">
                        <TextField
                            label={m::SEND_TIME}
                            input_type="datetime-local"
                            value={value.scheduling.send_time.clone()}
                            on_input={edit(value, on_change, |c: &mut SmsCampaign, text: String| {
                                c.scheduling.send_time = text;
                            })}
                            {disabled}
                        />
                        <SelectField
                            label={m::TIMEZONE}
                            value={value.scheduling.timezone.clone()}
                            options={plain_options(TIMEZONES)}
                            on_change={edit(value, on_change, |c: &mut SmsCampaign, zone: String| {
                                c.scheduling.timezone = zone;
                            })}
                            {disabled}
                        />
                    </div>
                    <TagInput
                        label={m::SEGMENTS}
                        placeholder={m::SEGMENTS_PLACEHOLDER}
                        values={value.audience.segments.clone()}
                        on_add={edit(value, on_change, |c: &mut SmsCampaign, raw: String| {
                            push_unique(&mut c.audience.segments, &raw);
                        })}
                        on_remove={edit(value, on_change, |c: &mut SmsCampaign, index: usize| {
                            remove_at(&mut c.audience.segments, index);
                        })}
                        {disabled}
                    />
                    <TagInput
                        label={m::EXCLUDED_SEGMENTS}
                        values={value.audience.excluded_segments.clone()}
                        on_add={edit(value, on_change, |c: &mut SmsCampaign, raw: String| {
                            push_unique(&mut c.audience.excluded_segments, &raw);
                        })}
                        on_remove={edit(value, on_change, |c: &mut SmsCampaign, index: usize| {
                            remove_at(&mut c.audience.excluded_segments, index);
                        })}
                        {disabled}
                    />
                </div>
            }) }
            { section(t::COMPLIANCE, html! {
                <div class="space-y-3">
                    <Toggle
                        label={t::OPT_IN}
                        checked={value.compliance.opt_in}
                        on_change={edit(value, on_change, |c: &mut SmsCampaign, on: bool| c.compliance.opt_in = on)}
                        {disabled}
                    />
                    <Toggle
                        label={t::OPT_OUT}
                        checked={value.compliance.opt_out_message}
                        on_change={edit(value, on_change, |c: &mut SmsCampaign, on: bool| {
                            c.compliance.opt_out_message = on;
                        })}
                        {disabled}
                    />
                </div>
            }) }
            { section(m::TRACKING, html! {
                <div class="space-y-3">
                    <Toggle
                        label={t::TRACK_DELIVERY}
                        checked={value.tracking.delivery_tracking}
                        on_change={edit(value, on_change, |c: &mut SmsCampaign, on: bool| {
                            c.tracking.delivery_tracking = on;
                        })}
                        {disabled}
                    />
                    <Toggle
                        label={t::TRACK_CLICKS}
                        checked={value.tracking.click_tracking}
                        on_change={edit(value, on_change, |c: &mut SmsCampaign, on: bool| c.tracking.click_tracking = on)}
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
    fn counter_counts_characters_not_bytes() {
        let mut campaign = SmsCampaign::draft("2024-06-01T09:00");
        campaign.message = "Café ☕".to_string();
        assert_eq!(counter(&campaign), "6/160 characters");
    }
}
