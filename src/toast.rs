//! User-visible notifications raised by the contact form.

use crate::i18n::{Language, LocalizedText};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

const SENT_TITLE: LocalizedText =
    LocalizedText::new("Mensagem enviada com sucesso!", "Message sent successfully!");
const SENT_DESCRIPTION: LocalizedText = LocalizedText::new(
    "Obrigado pelo contato. Retornarei em breve.",
    "Thank you for reaching out. I'll get back to you soon.",
);
const FAILED_TITLE: LocalizedText =
    LocalizedText::new("Erro ao enviar mensagem", "Error sending message");
const FAILED_DESCRIPTION: LocalizedText = LocalizedText::new(
    "Por favor, tente novamente ou entre em contato diretamente por email.",
    "Please try again or contact me directly via email.",
);

impl Toast {
    fn localized(
        language: Language,
        title: LocalizedText,
        description: LocalizedText,
        variant: ToastVariant,
    ) -> Self {
        Self {
            title: title.resolve(language).to_string(),
            description: description.resolve(language).to_string(),
            variant,
        }
    }

    pub fn message_sent(language: Language) -> Self {
        Self::localized(language, SENT_TITLE, SENT_DESCRIPTION, ToastVariant::Default)
    }

    pub fn message_failed(language: Language) -> Self {
        Self::localized(
            language,
            FAILED_TITLE,
            FAILED_DESCRIPTION,
            ToastVariant::Destructive,
        )
    }
}
