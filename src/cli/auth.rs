use crate::domain::credentials::Credential;

use super::ClientContext;

pub async fn login(context: &ClientContext, token: &str) -> anyhow::Result<()> {
    context.credentials.set(Credential::new(token)?).await?;
    println!("Credential stored.");
    Ok(())
}

pub async fn logout(context: &ClientContext) -> anyhow::Result<()> {
    context.credentials.clear().await?;
    println!("Credential cleared.");
    Ok(())
}
