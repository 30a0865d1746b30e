//! Structured payloads
//!
//! Each builder renders the text that scanner apps recognize for a given
//! action (join a Wi-Fi network, add a contact, open a map, ...). The text is
//! encoded like any other string, see [`crate::encode_payload`].

use std::fmt;

/// Anything that renders to the text stored in a symbol
pub trait QrPayload {
    /// Text handed to the encoder
    fn encode(&self) -> String;
}

/// Plain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(pub String);

impl Text {
    /// Wrap a string
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl QrPayload for Text {
    fn encode(&self) -> String {
        self.0.clone()
    }
}

/// Link, stored as is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url(pub String);

impl Url {
    /// Wrap a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl QrPayload for Url {
    fn encode(&self) -> String {
        self.0.clone()
    }
}

/// `mailto:` link with optional cc, subject and body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Email {
    /// Recipient address
    pub email: String,
    /// Carbon copy address
    pub copy_to: Option<String>,
    /// Subject line, percent-encoded
    pub subject: Option<String>,
    /// Message body, percent-encoded
    pub body: Option<String>,
}

impl Email {
    /// Message to `email`
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Add a cc address
    pub fn with_copy_to(mut self, copy_to: impl Into<String>) -> Self {
        self.copy_to = Some(copy_to.into());
        self
    }

    /// Add a subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add a body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl QrPayload for Email {
    fn encode(&self) -> String {
        let mut queries = Vec::new();
        if let Some(cc) = non_empty(&self.copy_to) {
            queries.push(format!("cc={cc}"));
        }
        if let Some(subject) = non_empty(&self.subject) {
            queries.push(format!("subject={}", uri_component(subject)));
        }
        if let Some(body) = non_empty(&self.body) {
            queries.push(format!("body={}", uri_component(body)));
        }

        if queries.is_empty() {
            format!("mailto:{}", self.email)
        } else {
            format!("mailto:{}?{}", self.email, queries.join("&"))
        }
    }
}

/// Geographic position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPos {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl GeoPos {
    /// Position at (lat, lon)
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl QrPayload for GeoPos {
    fn encode(&self) -> String {
        format!("GEO:{},{}", self.lat, self.lon)
    }
}

/// Browser bookmark (MEBKM)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// Target URL
    pub url: String,
    /// Display title
    pub title: String,
}

impl Bookmark {
    /// Bookmark `url` as `title`
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

impl QrPayload for Bookmark {
    fn encode(&self) -> String {
        format!("MEBKM:URL:{};TITLE:{};", self.url, self.title)
    }
}

/// Wi-Fi security type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authentication {
    /// WEP key
    Wep,
    /// WPA/WPA2 passphrase
    Wpa,
    /// Open network
    Open,
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Authentication::Wep => "WEP",
            Authentication::Wpa => "WPA",
            Authentication::Open => "nopass",
        })
    }
}

impl std::str::FromStr for Authentication {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wep" => Ok(Authentication::Wep),
            "wpa" | "wpa2" => Ok(Authentication::Wpa),
            "nopass" | "open" | "none" => Ok(Authentication::Open),
            other => Err(format!("unknown authentication '{other}'")),
        }
    }
}

/// Wi-Fi network credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wifi {
    /// Security type, omitted when `None`
    pub authentication: Option<Authentication>,
    /// Network name
    pub ssid: Option<String>,
    /// Passphrase or key
    pub psk: Option<String>,
    /// Network does not broadcast its SSID
    pub hidden: bool,
}

impl Wifi {
    /// Network named `ssid`
    pub fn new(ssid: impl Into<String>) -> Self {
        Self {
            ssid: Some(ssid.into()),
            ..Self::default()
        }
    }

    /// Set the security type
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Set the passphrase
    pub fn with_psk(mut self, psk: impl Into<String>) -> Self {
        self.psk = Some(psk.into());
        self
    }

    /// Mark the network as hidden
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Backslash-escape `\ , ; . " '`
    pub fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, '\\' | ',' | ';' | '.' | '"' | '\'') {
                out.push('\\');
            }
            out.push(c);
        }
        out
    }
}

impl QrPayload for Wifi {
    fn encode(&self) -> String {
        let mut out = String::from("WIFI:");
        if let Some(ssid) = non_empty(&self.ssid) {
            out.push_str(&format!("S:{};", Wifi::escape(ssid)));
        }
        if let Some(auth) = self.authentication {
            out.push_str(&format!("T:{auth};"));
        }
        if let Some(psk) = non_empty(&self.psk) {
            out.push_str(&format!("P:{};", Wifi::escape(psk)));
        }
        out.push_str(&format!("H:{};", self.hidden));
        out
    }
}

/// WPA-Enterprise network credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnterpriseWifi {
    /// Network name
    pub ssid: Option<String>,
    /// Password
    pub psk: Option<String>,
    /// Network does not broadcast its SSID
    pub hidden: bool,
    /// Identity
    pub user: Option<String>,
    /// EAP method (PEAP, TTLS, ...)
    pub eap: Option<String>,
    /// Phase 2 method (MSCHAPV2, ...)
    pub phase: Option<String>,
}

impl QrPayload for EnterpriseWifi {
    fn encode(&self) -> String {
        let mut out = String::from("WIFI:");
        let fields = [
            ("S", &self.ssid),
            ("U", &self.user),
            ("P", &self.psk),
            ("E", &self.eap),
            ("PH", &self.phase),
        ];
        for (key, value) in fields {
            if let Some(value) = non_empty(value) {
                out.push_str(&format!("{key}:{};", Wifi::escape(value)));
            }
        }
        out.push_str(&format!("H:{};", self.hidden));
        out
    }
}

/// Phone number (`TEL:`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(pub String);

impl QrPayload for Phone {
    fn encode(&self) -> String {
        format!("TEL:{}", self.0)
    }
}

/// SMS or MMS with an optional message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sms {
    /// Recipient number
    pub phone_number: String,
    /// Message text
    pub subject: Option<String>,
    /// Send as MMS instead of SMS
    pub is_mms: bool,
}

impl QrPayload for Sms {
    fn encode(&self) -> String {
        let scheme = if self.is_mms { "MMS" } else { "SMS" };
        match non_empty(&self.subject) {
            Some(subject) => format!("{scheme}:{}:{subject}", self.phone_number),
            None => format!("{scheme}:{}", self.phone_number),
        }
    }
}

/// Business card (`BIZCARD:`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BizCard {
    /// First name
    pub first_name: Option<String>,
    /// Last name
    pub second_name: Option<String>,
    /// Job title
    pub job: Option<String>,
    /// Company
    pub company: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Email address
    pub email: Option<String>,
}

impl QrPayload for BizCard {
    fn encode(&self) -> String {
        let fields = [
            ("N", &self.first_name),
            ("X", &self.second_name),
            ("T", &self.job),
            ("C", &self.company),
            ("A", &self.address),
            ("B", &self.phone),
            ("E", &self.email),
        ];
        let mut out = String::from("BIZCARD:");
        push_fields(&mut out, &fields, ";");
        out.push(';');
        out
    }
}

/// vCard 3.0 contact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCard {
    /// Structured name
    pub name: Option<String>,
    /// Organization
    pub company: Option<String>,
    /// Job title
    pub title: Option<String>,
    /// Phone number
    pub phone_number: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Home page
    pub website: Option<String>,
    /// Free-form note
    pub note: Option<String>,
}

impl QrPayload for VCard {
    fn encode(&self) -> String {
        let fields = [
            ("N", &self.name),
            ("ORG", &self.company),
            ("TITLE", &self.title),
            ("TEL", &self.phone_number),
            ("URL", &self.website),
            ("EMAIL", &self.email),
            ("ADR", &self.address),
            ("NOTE", &self.note),
        ];
        let mut out = String::from("BEGIN:VCARD\nVERSION:3.0\n");
        push_fields(&mut out, &fields, "\n");
        out.push_str("END:VCARD");
        out
    }
}

/// MeCard contact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeCard {
    /// Name
    pub name: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Phone number
    pub phone_number: Option<String>,
    /// Email address
    pub email: Option<String>,
}

impl QrPayload for MeCard {
    fn encode(&self) -> String {
        let fields = [
            ("N", &self.name),
            ("ADR", &self.address),
            ("TEL", &self.phone_number),
            ("EMAIL", &self.email),
        ];
        let mut out = String::from("MECARD:");
        push_fields(&mut out, &fields, ";");
        out.push(';');
        out
    }
}

/// YouTube video id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YouTube(pub String);

impl QrPayload for YouTube {
    fn encode(&self) -> String {
        format!("YOUTUBE:{}", self.0)
    }
}

/// Calendar event (VEVENT)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    /// Unique id
    pub uid: Option<String>,
    /// Creation timestamp
    pub stamp: Option<String>,
    /// Organizer
    pub organizer: Option<String>,
    /// Start time
    pub start: Option<String>,
    /// End time
    pub end: Option<String>,
    /// Title
    pub summary: Option<String>,
}

impl QrPayload for Event {
    fn encode(&self) -> String {
        let fields = [
            ("UID", &self.uid),
            ("DTSTAMP", &self.stamp),
            ("ORGANIZER", &self.organizer),
            ("DTSTART", &self.start),
            ("DTEND", &self.end),
            ("SUMMARY", &self.summary),
        ];
        let mut out = String::from("BEGIN:VEVENT\n");
        push_fields(&mut out, &fields, "\n");
        out.push_str("END:VEVENT");
        out
    }
}

/// Google Play listing for an app package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GooglePlay(pub String);

impl QrPayload for GooglePlay {
    fn encode(&self) -> String {
        format!("market://details?id={}", self.0)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// `KEY:value` followed by `terminator` for every present field
fn push_fields(out: &mut String, fields: &[(&str, &Option<String>)], terminator: &str) {
    for (key, value) in fields {
        if let Some(value) = non_empty(value) {
            out.push_str(&format!("{key}:{value}{terminator}"));
        }
    }
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
fn uri_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert_eq!(Email::new("a@b.c").encode(), "mailto:a@b.c");
        let email = Email::new("a@b.c")
            .with_copy_to("d@e.f")
            .with_subject("Hi there")
            .with_body("1+1=2 & more");
        assert_eq!(
            email.encode(),
            "mailto:a@b.c?cc=d@e.f&subject=Hi%20there&body=1%2B1%3D2%20%26%20more"
        );
    }

    #[test]
    fn test_uri_component_utf8() {
        assert_eq!(uri_component("é"), "%C3%A9");
        assert_eq!(uri_component("it's (ok)!"), "it's%20(ok)!");
    }

    #[test]
    fn test_wifi() {
        let wifi = Wifi::new("My;Net")
            .with_authentication(Authentication::Wpa)
            .with_psk("p.a,ss")
            .with_hidden(true);
        assert_eq!(wifi.encode(), r"WIFI:S:My\;Net;T:WPA;P:p\.a\,ss;H:true;");
        assert_eq!(Wifi::default().encode(), "WIFI:H:false;");
        assert_eq!(Wifi::escape(r#"a\b"c'"#), r#"a\\b\"c\'"#);
    }

    #[test]
    fn test_authentication_names() {
        assert_eq!(Authentication::Open.to_string(), "nopass");
        assert_eq!("wpa".parse::<Authentication>(), Ok(Authentication::Wpa));
        assert!("psk".parse::<Authentication>().is_err());
    }

    #[test]
    fn test_enterprise_wifi() {
        let wifi = EnterpriseWifi {
            ssid: Some("corp".into()),
            user: Some("jdoe".into()),
            psk: Some("secret".into()),
            eap: Some("PEAP".into()),
            phase: Some("MSCHAPV2".into()),
            hidden: false,
        };
        assert_eq!(
            wifi.encode(),
            "WIFI:S:corp;U:jdoe;P:secret;E:PEAP;PH:MSCHAPV2;H:false;"
        );
    }

    #[test]
    fn test_simple_schemes() {
        assert_eq!(GeoPos::new(48.8566, 2.0).encode(), "GEO:48.8566,2");
        assert_eq!(
            Bookmark::new("https://x.y", "X").encode(),
            "MEBKM:URL:https://x.y;TITLE:X;"
        );
        assert_eq!(Phone("+123".into()).encode(), "TEL:+123");
        assert_eq!(YouTube("abc".into()).encode(), "YOUTUBE:abc");
        assert_eq!(
            GooglePlay("com.example".into()).encode(),
            "market://details?id=com.example"
        );
        assert_eq!(Text::new("hi").encode(), "hi");
    }

    #[test]
    fn test_sms() {
        let sms = Sms {
            phone_number: "555".into(),
            subject: Some("hello".into()),
            is_mms: false,
        };
        assert_eq!(sms.encode(), "SMS:555:hello");
        let mms = Sms {
            phone_number: "555".into(),
            is_mms: true,
            ..Sms::default()
        };
        assert_eq!(mms.encode(), "MMS:555");
    }

    #[test]
    fn test_cards() {
        let biz = BizCard {
            first_name: Some("Ada".into()),
            company: Some("ACME".into()),
            ..BizCard::default()
        };
        assert_eq!(biz.encode(), "BIZCARD:N:Ada;C:ACME;;");

        let me = MeCard {
            name: Some("Ada".into()),
            email: Some("ada@x.y".into()),
            ..MeCard::default()
        };
        assert_eq!(me.encode(), "MECARD:N:Ada;EMAIL:ada@x.y;;");

        let vcard = VCard {
            name: Some("Lovelace;Ada".into()),
            website: Some("https://ada.dev".into()),
            phone_number: Some("123".into()),
            ..VCard::default()
        };
        assert_eq!(
            vcard.encode(),
            "BEGIN:VCARD\nVERSION:3.0\nN:Lovelace;Ada\nTEL:123\nURL:https://ada.dev\nEND:VCARD"
        );
    }

    #[test]
    fn test_event() {
        let event = Event {
            uid: Some("1".into()),
            start: Some("20250101T100000Z".into()),
            summary: Some("Launch".into()),
            ..Event::default()
        };
        assert_eq!(
            event.encode(),
            "BEGIN:VEVENT\nUID:1\nDTSTART:20250101T100000Z\nSUMMARY:Launch\nEND:VEVENT"
        );
    }
}
