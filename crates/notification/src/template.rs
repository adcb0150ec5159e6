/// A rendered message ready to hand to the mailer.
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub subject: String,
    pub plain: String,
    pub html: Option<String>,
}

pub(crate) fn render<T: askama::Template>(template: &T) -> anyhow::Result<String> {
    template.render().map_err(|err| {
        tracing::error!(err = %err, "Failed to render email template");
        anyhow::Error::from(err)
    })
}
