pub trait Encryptor: Send + Sync {
    fn encrypt(&self, message: &str) -> String;
}

pub trait Decryptor: Send + Sync {
    fn decrypt(&self, message: &str) -> String;
}
