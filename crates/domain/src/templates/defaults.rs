use super::{TemplateCategory, TemplateLocale};

/// Default subject/body/SMS content for one locale. Custom step overrides
/// replace the chosen entry before substitution.
pub struct TemplateSet {
    pub reminder_subject: &'static str,
    pub reminder_body: &'static str,
    pub reminder_sms: &'static str,
    pub new_booking_subject: &'static str,
    pub new_booking_body: &'static str,
    pub new_booking_sms: &'static str,
    pub cancellation_subject: &'static str,
    pub cancellation_body: &'static str,
    pub cancellation_sms: &'static str,
    pub reschedule_subject: &'static str,
    pub reschedule_body: &'static str,
    pub reschedule_sms: &'static str,
}

impl TemplateSet {
    pub fn email_subject(&self, category: TemplateCategory) -> &'static str {
        match category {
            TemplateCategory::Reminder => self.reminder_subject,
            TemplateCategory::NewBooking => self.new_booking_subject,
            TemplateCategory::Cancellation => self.cancellation_subject,
            TemplateCategory::Reschedule => self.reschedule_subject,
        }
    }

    pub fn email_body(&self, category: TemplateCategory) -> &'static str {
        match category {
            TemplateCategory::Reminder => self.reminder_body,
            TemplateCategory::NewBooking => self.new_booking_body,
            TemplateCategory::Cancellation => self.cancellation_body,
            TemplateCategory::Reschedule => self.reschedule_body,
        }
    }

    pub fn sms_body(&self, category: TemplateCategory) -> &'static str {
        match category {
            TemplateCategory::Reminder => self.reminder_sms,
            TemplateCategory::NewBooking => self.new_booking_sms,
            TemplateCategory::Cancellation => self.cancellation_sms,
            TemplateCategory::Reschedule => self.reschedule_sms,
        }
    }
}

pub fn template_set(locale: TemplateLocale) -> &'static TemplateSet {
    match locale {
        TemplateLocale::En => &EN,
        TemplateLocale::De => &DE,
        TemplateLocale::Es => &ES,
        TemplateLocale::Fr => &FR,
        TemplateLocale::Pt => &PT,
    }
}

static EN: TemplateSet = TemplateSet {
    reminder_subject: "Reminder: {EVENT_TITLE} on {EVENT_DATE}",
    reminder_body: "Hi {ATTENDEE_NAME},\n\n\
        This is a reminder about your upcoming event.\n\n\
        {EVENT_TITLE} with {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Location: {LOCATION}\n\n\
        {ADDITIONAL_NOTES}",
    reminder_sms: "Hi {ATTENDEE_NAME}, this is a reminder that your event \
        {EVENT_TITLE} with {ORGANIZER_NAME} is on {EVENT_DATE} at {EVENT_TIME} \
        ({EVENT_TIMEZONE}).",
    new_booking_subject: "Confirmed: {EVENT_TITLE} on {EVENT_DATE}",
    new_booking_body: "Hi {ATTENDEE_NAME},\n\n\
        Your booking has been confirmed.\n\n\
        {EVENT_TITLE} with {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Location: {LOCATION}\n\
        Join: {MEETING_URL}\n\n\
        Need to make a change? Reschedule: {RESCHEDULE_URL}\n\
        Cancel: {CANCEL_URL}",
    new_booking_sms: "Hi {ATTENDEE_NAME}, your event {EVENT_TITLE} with \
        {ORGANIZER_NAME} on {EVENT_DATE} at {EVENT_TIME} ({EVENT_TIMEZONE}) \
        has been confirmed.",
    cancellation_subject: "Cancelled: {EVENT_TITLE} on {EVENT_DATE}",
    cancellation_body: "Hi {ATTENDEE_NAME},\n\n\
        Your event has been cancelled.\n\n\
        {EVENT_TITLE} with {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} ({EVENT_TIMEZONE})\n\n\
        {ADDITIONAL_NOTES}",
    cancellation_sms: "Hi {ATTENDEE_NAME}, your event {EVENT_TITLE} with \
        {ORGANIZER_NAME} on {EVENT_DATE} at {EVENT_TIME} ({EVENT_TIMEZONE}) \
        has been cancelled.",
    reschedule_subject: "Rescheduled: {EVENT_TITLE} on {EVENT_DATE}",
    reschedule_body: "Hi {ATTENDEE_NAME},\n\n\
        Your event has been rescheduled.\n\n\
        {EVENT_TITLE} with {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Location: {LOCATION}\n\
        Join: {MEETING_URL}",
    reschedule_sms: "Hi {ATTENDEE_NAME}, your event {EVENT_TITLE} with \
        {ORGANIZER_NAME} has been moved to {EVENT_DATE} at {EVENT_TIME} \
        ({EVENT_TIMEZONE}).",
};

static DE: TemplateSet = TemplateSet {
    reminder_subject: "Erinnerung: {EVENT_TITLE} am {EVENT_DATE}",
    reminder_body: "Hallo {ATTENDEE_NAME},\n\n\
        dies ist eine Erinnerung an Ihren bevorstehenden Termin.\n\n\
        {EVENT_TITLE} mit {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Ort: {LOCATION}\n\n\
        {ADDITIONAL_NOTES}",
    reminder_sms: "Hallo {ATTENDEE_NAME}, Erinnerung: Ihr Termin {EVENT_TITLE} \
        mit {ORGANIZER_NAME} findet am {EVENT_DATE} um {EVENT_TIME} \
        ({EVENT_TIMEZONE}) statt.",
    new_booking_subject: "Bestätigt: {EVENT_TITLE} am {EVENT_DATE}",
    new_booking_body: "Hallo {ATTENDEE_NAME},\n\n\
        Ihre Buchung wurde bestätigt.\n\n\
        {EVENT_TITLE} mit {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Ort: {LOCATION}\n\
        Teilnehmen: {MEETING_URL}\n\n\
        Termin verschieben: {RESCHEDULE_URL}\n\
        Stornieren: {CANCEL_URL}",
    new_booking_sms: "Hallo {ATTENDEE_NAME}, Ihr Termin {EVENT_TITLE} mit \
        {ORGANIZER_NAME} am {EVENT_DATE} um {EVENT_TIME} ({EVENT_TIMEZONE}) \
        wurde bestätigt.",
    cancellation_subject: "Abgesagt: {EVENT_TITLE} am {EVENT_DATE}",
    cancellation_body: "Hallo {ATTENDEE_NAME},\n\n\
        Ihr Termin wurde abgesagt.\n\n\
        {EVENT_TITLE} mit {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} ({EVENT_TIMEZONE})\n\n\
        {ADDITIONAL_NOTES}",
    cancellation_sms: "Hallo {ATTENDEE_NAME}, Ihr Termin {EVENT_TITLE} mit \
        {ORGANIZER_NAME} am {EVENT_DATE} um {EVENT_TIME} ({EVENT_TIMEZONE}) \
        wurde abgesagt.",
    reschedule_subject: "Verschoben: {EVENT_TITLE} am {EVENT_DATE}",
    reschedule_body: "Hallo {ATTENDEE_NAME},\n\n\
        Ihr Termin wurde verschoben.\n\n\
        {EVENT_TITLE} mit {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Ort: {LOCATION}\n\
        Teilnehmen: {MEETING_URL}",
    reschedule_sms: "Hallo {ATTENDEE_NAME}, Ihr Termin {EVENT_TITLE} mit \
        {ORGANIZER_NAME} wurde auf den {EVENT_DATE} um {EVENT_TIME} \
        ({EVENT_TIMEZONE}) verschoben.",
};

static ES: TemplateSet = TemplateSet {
    reminder_subject: "Recordatorio: {EVENT_TITLE} el {EVENT_DATE}",
    reminder_body: "Hola {ATTENDEE_NAME}:\n\n\
        Este es un recordatorio de su próximo evento.\n\n\
        {EVENT_TITLE} con {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Lugar: {LOCATION}\n\n\
        {ADDITIONAL_NOTES}",
    reminder_sms: "Hola {ATTENDEE_NAME}, le recordamos que su evento \
        {EVENT_TITLE} con {ORGANIZER_NAME} es el {EVENT_DATE} a las \
        {EVENT_TIME} ({EVENT_TIMEZONE}).",
    new_booking_subject: "Confirmado: {EVENT_TITLE} el {EVENT_DATE}",
    new_booking_body: "Hola {ATTENDEE_NAME}:\n\n\
        Su reserva ha sido confirmada.\n\n\
        {EVENT_TITLE} con {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Lugar: {LOCATION}\n\
        Unirse: {MEETING_URL}\n\n\
        Reprogramar: {RESCHEDULE_URL}\n\
        Cancelar: {CANCEL_URL}",
    new_booking_sms: "Hola {ATTENDEE_NAME}, su evento {EVENT_TITLE} con \
        {ORGANIZER_NAME} el {EVENT_DATE} a las {EVENT_TIME} ({EVENT_TIMEZONE}) \
        ha sido confirmado.",
    cancellation_subject: "Cancelado: {EVENT_TITLE} el {EVENT_DATE}",
    cancellation_body: "Hola {ATTENDEE_NAME}:\n\n\
        Su evento ha sido cancelado.\n\n\
        {EVENT_TITLE} con {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} ({EVENT_TIMEZONE})\n\n\
        {ADDITIONAL_NOTES}",
    cancellation_sms: "Hola {ATTENDEE_NAME}, su evento {EVENT_TITLE} con \
        {ORGANIZER_NAME} el {EVENT_DATE} a las {EVENT_TIME} ({EVENT_TIMEZONE}) \
        ha sido cancelado.",
    reschedule_subject: "Reprogramado: {EVENT_TITLE} el {EVENT_DATE}",
    reschedule_body: "Hola {ATTENDEE_NAME}:\n\n\
        Su evento ha sido reprogramado.\n\n\
        {EVENT_TITLE} con {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Lugar: {LOCATION}\n\
        Unirse: {MEETING_URL}",
    reschedule_sms: "Hola {ATTENDEE_NAME}, su evento {EVENT_TITLE} con \
        {ORGANIZER_NAME} se ha movido al {EVENT_DATE} a las {EVENT_TIME} \
        ({EVENT_TIMEZONE}).",
};

static FR: TemplateSet = TemplateSet {
    reminder_subject: "Rappel : {EVENT_TITLE} le {EVENT_DATE}",
    reminder_body: "Bonjour {ATTENDEE_NAME},\n\n\
        Ceci est un rappel concernant votre prochain événement.\n\n\
        {EVENT_TITLE} avec {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Lieu : {LOCATION}\n\n\
        {ADDITIONAL_NOTES}",
    reminder_sms: "Bonjour {ATTENDEE_NAME}, rappel : votre événement \
        {EVENT_TITLE} avec {ORGANIZER_NAME} a lieu le {EVENT_DATE} à \
        {EVENT_TIME} ({EVENT_TIMEZONE}).",
    new_booking_subject: "Confirmé : {EVENT_TITLE} le {EVENT_DATE}",
    new_booking_body: "Bonjour {ATTENDEE_NAME},\n\n\
        Votre réservation a été confirmée.\n\n\
        {EVENT_TITLE} avec {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Lieu : {LOCATION}\n\
        Rejoindre : {MEETING_URL}\n\n\
        Reprogrammer : {RESCHEDULE_URL}\n\
        Annuler : {CANCEL_URL}",
    new_booking_sms: "Bonjour {ATTENDEE_NAME}, votre événement {EVENT_TITLE} \
        avec {ORGANIZER_NAME} le {EVENT_DATE} à {EVENT_TIME} ({EVENT_TIMEZONE}) \
        a été confirmé.",
    cancellation_subject: "Annulé : {EVENT_TITLE} le {EVENT_DATE}",
    cancellation_body: "Bonjour {ATTENDEE_NAME},\n\n\
        Votre événement a été annulé.\n\n\
        {EVENT_TITLE} avec {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} ({EVENT_TIMEZONE})\n\n\
        {ADDITIONAL_NOTES}",
    cancellation_sms: "Bonjour {ATTENDEE_NAME}, votre événement {EVENT_TITLE} \
        avec {ORGANIZER_NAME} le {EVENT_DATE} à {EVENT_TIME} ({EVENT_TIMEZONE}) \
        a été annulé.",
    reschedule_subject: "Reprogrammé : {EVENT_TITLE} le {EVENT_DATE}",
    reschedule_body: "Bonjour {ATTENDEE_NAME},\n\n\
        Votre événement a été reprogrammé.\n\n\
        {EVENT_TITLE} avec {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Lieu : {LOCATION}\n\
        Rejoindre : {MEETING_URL}",
    reschedule_sms: "Bonjour {ATTENDEE_NAME}, votre événement {EVENT_TITLE} \
        avec {ORGANIZER_NAME} a été déplacé au {EVENT_DATE} à {EVENT_TIME} \
        ({EVENT_TIMEZONE}).",
};

static PT: TemplateSet = TemplateSet {
    reminder_subject: "Lembrete: {EVENT_TITLE} em {EVENT_DATE}",
    reminder_body: "Olá {ATTENDEE_NAME},\n\n\
        Este é um lembrete do seu próximo evento.\n\n\
        {EVENT_TITLE} com {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Local: {LOCATION}\n\n\
        {ADDITIONAL_NOTES}",
    reminder_sms: "Olá {ATTENDEE_NAME}, lembrete: o seu evento {EVENT_TITLE} \
        com {ORGANIZER_NAME} é em {EVENT_DATE} às {EVENT_TIME} \
        ({EVENT_TIMEZONE}).",
    new_booking_subject: "Confirmado: {EVENT_TITLE} em {EVENT_DATE}",
    new_booking_body: "Olá {ATTENDEE_NAME},\n\n\
        A sua reserva foi confirmada.\n\n\
        {EVENT_TITLE} com {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Local: {LOCATION}\n\
        Entrar: {MEETING_URL}\n\n\
        Reagendar: {RESCHEDULE_URL}\n\
        Cancelar: {CANCEL_URL}",
    new_booking_sms: "Olá {ATTENDEE_NAME}, o seu evento {EVENT_TITLE} com \
        {ORGANIZER_NAME} em {EVENT_DATE} às {EVENT_TIME} ({EVENT_TIMEZONE}) \
        foi confirmado.",
    cancellation_subject: "Cancelado: {EVENT_TITLE} em {EVENT_DATE}",
    cancellation_body: "Olá {ATTENDEE_NAME},\n\n\
        O seu evento foi cancelado.\n\n\
        {EVENT_TITLE} com {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} ({EVENT_TIMEZONE})\n\n\
        {ADDITIONAL_NOTES}",
    cancellation_sms: "Olá {ATTENDEE_NAME}, o seu evento {EVENT_TITLE} com \
        {ORGANIZER_NAME} em {EVENT_DATE} às {EVENT_TIME} ({EVENT_TIMEZONE}) \
        foi cancelado.",
    reschedule_subject: "Reagendado: {EVENT_TITLE} em {EVENT_DATE}",
    reschedule_body: "Olá {ATTENDEE_NAME},\n\n\
        O seu evento foi reagendado.\n\n\
        {EVENT_TITLE} com {ORGANIZER_NAME}\n\
        {EVENT_DATE}\n\
        {EVENT_TIME} - {EVENT_END_TIME} ({EVENT_TIMEZONE})\n\
        Local: {LOCATION}\n\
        Entrar: {MEETING_URL}",
    reschedule_sms: "Olá {ATTENDEE_NAME}, o seu evento {EVENT_TITLE} com \
        {ORGANIZER_NAME} foi movido para {EVENT_DATE} às {EVENT_TIME} \
        ({EVENT_TIMEZONE}).",
};
