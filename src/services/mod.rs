//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 포트를 생성자로 주입받으며, 핸들러에는 `web::Data`로 전달됩니다.

pub mod users;
