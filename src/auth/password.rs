// bcrypt is CPU bound, so both directions run on the blocking pool.

pub async fn hash_password(password: String, cost: u32) -> Result<String, crate::services::ServiceError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, crate::services::ServiceError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}
