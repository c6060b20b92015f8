use dcampaigner_shared::payloads::{push_unique, EmailCampaign, EMAIL_TEMPLATES, TIMEZONES};
use yew::prelude::*;

use super::{edit, remove_at, section};
use crate::{
    components::{
        form_fields::{plain_options, SelectField, TextArea, TextField, Toggle},
        tag_input::TagInput,
    },
    i18n::current::{email_form as t, message_form as m},
};

#[derive(Properties, PartialEq)]
pub struct EmailFormProps {
    pub value: EmailCampaign,
    pub on_change: Callback<EmailCampaign>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(EmailForm)]
pub fn email_form(props: &EmailFormProps) -> Html {
    let value = &props.value;
    let on_change = &props.on_change;
    let disabled = props.disabled;

    html! {
        <div class="space-y-4">
            { section(t::TITLE, html! {
                <div class="space-y-4">
                    <TextField
                        label={t::SUBJECT}
                        value={value.subject.clone()}
                        required=true
                        on_input={edit(value, on_change, |c: &mut EmailCampaign, text: String| c.subject = text)}
                        {disabled}
                    />
                    <SelectField
                        label={t::TEMPLATE}
                        value={value.template.clone()}
                        options={plain_options(EMAIL_TEMPLATES)}
                        on_change={edit(value, on_change, |c: &mut EmailCampaign, template: String| {
                            c.template = template;
                        })}
                        {disabled}
                    />
                    <div class="grid gap-4 md:grid-cols-3">
                        <TextField
                            label={t::SENDER_NAME}
                            value={value.sender.name.clone()}
                            on_input={edit(value, on_change, |c: &mut EmailCampaign, text: String| c.sender.name = text)}
                            {disabled}
                        />
                        <TextField
                            label={t::SENDER_EMAIL}
                            input_type="email"
                            value={value.sender.email.clone()}
                            required=true
                            on_input={edit(value, on_change, |c: &mut EmailCampaign, text: String| c.sender.email = text)}
                            {disabled}
                        />
                        <TextField
                            label={t::REPLY_TO}
                            input_type="email"
                            value={value.sender.reply_to.clone().unwrap_or_default()}
                            on_input={edit(value, on_change, |c: &mut EmailCampaign, text: String| {
                                c.sender.reply_to = (!text.trim().is_empty()).then_some(text);
                            })}
                            {disabled}
                        />
                    </div>
                    <TextArea
                        label={t::HTML_CONTENT}
                        value={value.content.html.clone()}
                        rows={8}
                        required=true
                        on_input={edit(value, on_change, |c: &mut EmailCampaign, text: String| c.content.html = text)}
                        {disabled}
                    />
                    <TextArea
                        label={t::PLAIN_TEXT}
                        value={value.content.plain_text.clone()}
                        rows={4}
                        on_input={edit(value, on_change, |c: &mut EmailCampaign, text: String| {
                            c.content.plain_text = text;
                        })}
                        {disabled}
                    />
                </div>
            }) }
            { section(m::SCHEDULE_AUDIENCE, html! {
                <div class="space-y-4">
                    <div class="grid gap-4 md:grid-cols-2">
                        <TextField
                            label={m::SEND_TIME}
                            input_type="datetime-local"
                            value={value.scheduling.send_time.clone()}
                            on_input={edit(value, on_change, |c: &mut EmailCampaign, text: String| {
                                c.scheduling.send_time = text;
                            })}
                            {disabled}
                        />
                        <SelectField
                            label={m::TIMEZONE}
                            value={value.scheduling.timezone.clone()}
                            options={plain_options(TIMEZONES)}
                            on_change={edit(value, on_change, |c: &mut EmailCampaign, zone: String| {
                                c.scheduling.timezone = zone;
                            })}
                            {disabled}
                        />
                    </div>
                    <TagInput
                        label={m::SEGMENTS}
                        placeholder={m::SEGMENTS_PLACEHOLDER}
                        values={value.audience.segments.clone()}
                        on_add={edit(value, on_change, |c: &mut EmailCampaign, raw: String| {
                            push_unique(&mut c.audience.segments, &raw);
                        })}
                        on_remove={edit(value, on_change, |c: &mut EmailCampaign, index: usize| {
                            remove_at(&mut c.audience.segments, index);
                        })}
                        {disabled}
                    />
                    <TagInput
                        label={m::EXCLUDED_SEGMENTS}
                        values={value.audience.excluded_segments.clone()}
                        on_add={edit(value, on_change, |c: &mut EmailCampaign, raw: String| {
                            push_unique(&mut c.audience.excluded_segments, &raw);
                        })}
                        on_remove={edit(value, on_change, |c: &mut EmailCampaign, index: usize| {
                            remove_at(&mut c.audience.excluded_segments, index);
                        })}
                        {disabled}
                    />
                </div>
            }) }
            { section(m::TRACKING, html! {
                <div class="space-y-3">
                    <Toggle
                        label={t::TRACK_OPENS}
                        checked={value.tracking.open_tracking}
                        on_change={edit(value, on_change, |c: &mut EmailCampaign, on: bool| c.tracking.open_tracking = on)}
                        {disabled}
                    />
                    <Toggle
                        label={t::TRACK_CLICKS}
                        checked={value.tracking.click_tracking}
                        on_change={edit(value, on_change, |c: &mut EmailCampaign, on: bool| c.tracking.click_tracking = on)}
                        {disabled}
                    />
                    <Toggle
                        label={t::TRACK_UNSUBSCRIBES}
                        checked={value.tracking.unsubscribe_tracking}
                        on_change={edit(value, on_change, |c: &mut EmailCampaign, on: bool| {
                            c.tracking.unsubscribe_tracking = on;
                        })}
                        {disabled}
                    />
                </div>
            }) }
        </div>
    }
}
