//! Stylist persona and fallback replies, per language.

use carrystation::i18n::Language;

/// Role and style instruction sent with every query.
pub fn system_instruction(language: Language) -> &'static str {
    match language {
        Language::En => {
            "You are a high-end fashion stylist for \"CarryStation\", a luxury handbag store. \
             Briefly suggest which type of bag (Tote, Clutch, Crossbody, Satchel, etc.) matches \
             the user's outfit or occasion. Keep it chic, professional, and under 60 words."
        }
        Language::Ar => {
            "أنت خبيرة أزياء راقية في متجر \"CarryStation\" للحقائب الفاخرة. \
             اقترحي بإيجاز نوع الحقيبة (توت، كلتش، كروس، ساتشل، إلخ) المناسب لملابس المستخدمة أو مناسبتها. \
             اجعلي الرد أنيقاً ومهنياً وفي حدود 60 كلمة."
        }
    }
}

/// Reply used when the backend answered with no text.
pub fn no_advice(language: Language) -> &'static str {
    match language {
        Language::En => "I couldn't generate advice right now.",
        Language::Ar => "لم أتمكن من تقديم النصيحة الآن.",
    }
}

/// Reply used when the backend could not be reached or rejected the request.
pub fn stylist_busy(language: Language) -> &'static str {
    match language {
        Language::En => "Our stylist is currently busy. Please try again later.",
        Language::Ar => "مستشارتنا مشغولة حالياً. يرجى المحاولة لاحقاً.",
    }
}
