//! 임시 비밀번호 생성기
//!
//! 12자, 대문자/소문자/숫자/특수문자(`!@#$%^&*`) 각 1자 이상을 보장합니다.
//! 문자 선택과 최종 순열 모두 운영체제 CSPRNG(`OsRng`)를 사용합니다.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use crate::domain::models::directory::TemporaryCredential;

pub const PASSWORD_LENGTH: usize = 12;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*";

const CLASSES: [&[u8]; 4] = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL];

/// 임시 비밀번호 생성기
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 새 임시 비밀번호를 생성합니다.
    ///
    /// 클래스마다 1자를 먼저 뽑고, 나머지 8자는 전체 알파벳에서 균등하게 뽑은 뒤
    /// 전체를 균등 순열로 섞습니다.
    pub fn generate(&self) -> TemporaryCredential {
        let mut rng = OsRng;
        let alphabet: Vec<u8> = CLASSES.concat();

        let mut chars: Vec<u8> = Vec::with_capacity(PASSWORD_LENGTH);
        for class in CLASSES {
            chars.push(class[rng.gen_range(0..class.len())]);
        }
        while chars.len() < PASSWORD_LENGTH {
            chars.push(alphabet[rng.gen_range(0..alphabet.len())]);
        }

        chars.shuffle(&mut rng);

        TemporaryCredential::new(chars.into_iter().map(char::from).collect())
    }
}
