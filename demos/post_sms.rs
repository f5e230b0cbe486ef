use std::io;

use qtelecom::{Auth, MessageText, QtClient, RawPhoneNumber, SendSms, SenderId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let user = std::env::var("QTELECOM_USER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "QTELECOM_USER environment variable is required",
        )
    })?;
    let password = std::env::var("QTELECOM_PASS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "QTELECOM_PASS environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("QTELECOM_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "QTELECOM_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("QTELECOM_MESSAGE")
        .unwrap_or_else(|_| "Hello from the qtelecom example.".to_owned());
    let sender = std::env::var("QTELECOM_SENDER")
        .ok()
        .map(SenderId::new)
        .transpose()?;

    let client = QtClient::new(Auth::new(user, password)?);
    let phone = RawPhoneNumber::new(phone_raw)?;
    let text = MessageText::new(message)?;
    let request = SendSms::new(vec![phone], text, sender)?;

    client.post_sms(request).await?;
    println!("message accepted by the gateway");

    Ok(())
}
