//! Document endpoints: PDF downloads (opaque bytes), invoice send, and the
//! single-shot multipart uploads. Uploads have no retry; a failure surfaces
//! to the caller and mutates nothing locally.

use crate::error::ClientResult;

use super::api_client::ApiClient;

/// Percent-encode a filename for use as a single path segment. Uploaded
/// names can carry spaces and slashes; both must not split the path.
fn encode_segment(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for piece in url::form_urlencoded::byte_serialize(name.as_bytes()) {
        out.push_str(piece);
    }
    // form encoding uses '+' for space, paths need %20
    out.replace('+', "%20")
}

#[derive(Clone)]
pub struct DocumentsService {
    api: ApiClient,
}

impl DocumentsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load_confirmation_pdf(&self, load_id: i64) -> ClientResult<Vec<u8>> {
        self.api.get_bytes(&format!("/pdf/loadconfirmation/{load_id}")).await
    }

    pub async fn bill_of_lading_pdf(&self, load_id: i64) -> ClientResult<Vec<u8>> {
        self.api.get_bytes(&format!("/pdf/billoflading/{load_id}")).await
    }

    pub async fn invoice_pdf(&self, load_id: i64) -> ClientResult<Vec<u8>> {
        self.api.get_bytes(&format!("/pdf/invoice/{load_id}")).await
    }

    /// Email the invoice to the client from the backend.
    pub async fn send_invoice(&self, load_id: i64) -> ClientResult<()> {
        self.api
            .post_empty(&format!("/pdf/invoice/send/{load_id}"), &[])
            .await
    }

    pub async fn upload_proof_of_delivery(
        &self,
        load_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<()> {
        self.api
            .upload(
                &format!("/pdf/{load_id}/upload-proof"),
                "file",
                file_name,
                bytes,
                "application/pdf",
            )
            .await
    }

    pub async fn upload_customs_invoice(
        &self,
        load_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> ClientResult<()> {
        self.api
            .upload(
                &format!("/loads/{load_id}/customs-invoice"),
                "file",
                file_name,
                bytes,
                mime,
            )
            .await
    }

    pub async fn upload_carrier_document(
        &self,
        carrier_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> ClientResult<()> {
        self.api
            .upload(
                &format!("/pdf/carriers/{carrier_id}/upload"),
                "file",
                file_name,
                bytes,
                mime,
            )
            .await
    }

    /// Fetch a previously uploaded carrier document by its stored filename.
    pub async fn download_carrier_document(
        &self,
        carrier_id: i64,
        file_name: &str,
    ) -> ClientResult<Vec<u8>> {
        self.api
            .get_bytes(&format!(
                "/pdf/carriers/{carrier_id}/download/{}",
                encode_segment(file_name)
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filenames_encode_to_a_single_path_segment() {
        assert_eq!(encode_segment("rate con 2024.pdf"), "rate%20con%202024.pdf");
        assert_eq!(encode_segment("a/b.pdf"), "a%2Fb.pdf");
        assert_eq!(encode_segment("insurance.pdf"), "insurance.pdf");
    }
}
