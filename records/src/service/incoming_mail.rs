use chrono::NaiveDate;
use common::{
    entities::incoming_mail::{IncomingMail, PublicIncomingMail},
    error::{self, AddCode},
    repository::RepositoryObject,
    serde_ext::double_option,
    validation,
};
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateIncomingMail {
    pub sender: String,
    pub letter_date: NaiveDate,
    pub letter_number: String,
    pub subject: String,
    pub attachment_label: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IncomingMailChange {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
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

pub struct IncomingMailService {
    repo: RepositoryObject<IncomingMail>,
}

impl IncomingMailService {
    pub fn new(repo: RepositoryObject<IncomingMail>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreateIncomingMail) -> error::Result<PublicIncomingMail> {
        validation::required_string("sender", &input.sender)?;
        validation::required_string("letter_number", &input.letter_number)?;
        validation::required_string("subject", &input.subject)?;

        let mail = IncomingMail {
            id: 0,
            sender: input.sender,
            letter_date: input.letter_date,
            letter_number: input.letter_number,
            subject: input.subject,
            attachment_label: input.attachment_label,
            created_at: 0,
            updated_at: 0,
        };

        Ok(self.repo.insert(mail).await?.into())
    }

    pub async fn list(&self) -> error::Result<Vec<PublicIncomingMail>> {
        Ok(self
            .repo
            .find_all()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn update(&self, change: IncomingMailChange) -> error::Result<PublicIncomingMail> {
        let mut patch = Document::new();

        if let Some(sender) = change.sender {
            validation::required_string("sender", &sender)?;
            patch.insert("sender", sender);
        }
        if let Some(letter_date) = change.letter_date {
            // stored as `YYYY-MM-DD`, matching the entity's serde shape
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
            return Err(anyhow::anyhow!("Incoming mail {} not found", change.id).code(404));
        };

        Ok(mail.into())
    }

    pub async fn delete(&self, id: i64) -> error::Result<bool> {
        self.repo.delete_by_id(id).await
    }
}
