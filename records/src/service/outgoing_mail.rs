use chrono::NaiveDate;
use common::{
    entities::outgoing_mail::{OutgoingMail, PublicOutgoingMail},
    error::{self, AddCode},
    repository::RepositoryObject,
    serde_ext::double_option,
    validation,
};
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOutgoingMail {
    pub recipient: String,
    pub letter_date: NaiveDate,
    pub letter_number: String,
    pub subject: String,
    pub attachment_label: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingMailChange {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub attachment_label: Option<Option<String>>,
}

pub struct OutgoingMailService {
    repo: RepositoryObject<OutgoingMail>,
}

impl OutgoingMailService {
    pub fn new(repo: RepositoryObject<OutgoingMail>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreateOutgoingMail) -> error::Result<PublicOutgoingMail> {
        validation::required_string("recipient", &input.recipient)?;
        validation::required_string("letter_number", &input.letter_number)?;
        validation::required_string("subject", &input.subject)?;

        let mail = OutgoingMail {
            id: 0,
            recipient: input.recipient,
            letter_date: input.letter_date,
            letter_number: input.letter_number,
            subject: input.subject,
            attachment_label: input.attachment_label,
            created_at: 0,
            updated_at: 0,
        };

        Ok(self.repo.insert(mail).await?.into())
    }

    pub async fn list(&self) -> error::Result<Vec<PublicOutgoingMail>> {
        Ok(self
            .repo
            .find_all()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn update(&self, change: OutgoingMailChange) -> error::Result<PublicOutgoingMail> {
        let mut patch = Document::new();

        if let Some(recipient) = change.recipient {
            validation::required_string("recipient", &recipient)?;
            patch.insert("recipient", recipient);
        }
        if let Some(letter_date) = change.letter_date {
            patch.insert("letter_date", letter_date.to_string());
        }
        if let Some(letter_number) = change.letter_number {
            validation::required_string("letter_number", &letter_number)?;
            patch.insert("letter_number", letter_number);
        }
        if let Some(subject) = change.subject {
            validation::required_string("subject", &subject)?;
            patch.insert("subject", subject);
        }
        if let Some(attachment_label) = change.attachment_label {
            patch.insert(
                "attachment_label",
                attachment_label.map_or(Bson::Null, Bson::String),
            );
        }

        let Some(mail) = self.repo.update_by_id(change.id, patch).await? else {
            return Err(anyhow::anyhow!("Outgoing mail {} not found", change.id).code(404));
        };

        Ok(mail.into())
    }

    pub async fn delete(&self, id: i64) -> error::Result<bool> {
        self.repo.delete_by_id(id).await
    }
}
