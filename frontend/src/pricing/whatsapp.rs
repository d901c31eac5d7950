use super::currency::FormattedPrice;

/// `https://wa.me/<number>?text=<message>` with the message url-encoded.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

/// Fills the package template: `{0}` is the package title and `{1}` is
/// `<tier> (<price> <currency>)`.
pub fn package_message(template: &str, package_title: &str, tier_name: &str, price: &FormattedPrice) -> String {
    let tier = format!("{} ({})", tier_name, price);
    template.replacen("{0}", package_title, 1).replacen("{1}", &tier, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::dictionary::{translate, Language};

    fn price(price: &str, currency: &str) -> FormattedPrice {
        FormattedPrice { price: price.into(), currency: currency.into() }
    }

    #[test]
    fn link_encodes_the_message() {
        let link = whatsapp_link("201099488562", "Hi & hello?");
        assert_eq!(link, "https://wa.me/201099488562?text=Hi%20%26%20hello%3F");
    }

    #[test]
    fn package_template_gets_title_tier_and_price() {
        let template = translate(Language::En, "whatsapp.package");
        let message = package_message(template, "Development Package", "Gold", &price("140", "USD"));
        assert!(message.contains("Development Package"));
        assert!(message.contains("Gold (140 USD)"));
        assert!(!message.contains("{0}"));
        assert!(!message.contains("{1}"));
    }

    #[test]
    fn only_the_first_placeholder_is_replaced() {
        let message = package_message("{0} {0} {1}", "A", "Silver", &price("70", "USD"));
        assert_eq!(message, "A {0} Silver (70 USD)");
    }

    #[test]
    fn arabic_message_encodes_into_a_valid_link() {
        let template = translate(Language::Ar, "whatsapp.package");
        let message = package_message(template, "باقة التطوير", "الذهبية", &price("2000", "جنيه"));
        let link = whatsapp_link("201099488562", &message);
        assert!(link.starts_with("https://wa.me/201099488562?text="));
        assert!(link.is_ascii());
    }
}
