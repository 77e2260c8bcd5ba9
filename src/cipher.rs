pub mod block;

pub use block::{
    Aes, Aes128, Aes192, Aes256, BlockCipher, BlockDecrypt, BlockEncrypt, BlockMode, Cbc, Ecb, Padding, Pkcs7, ZeroPadding,
};
