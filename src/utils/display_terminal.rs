//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 부트스트랩 과정(설정 로드, 디렉터리 게이트웨이 조립, 서비스 등록)을
//! 터미널에 단계별로 표시합니다.

const BOX_WIDTH: usize = 50;

/// 박스 형태 제목의 세 줄을 만듭니다. 텍스트는 중앙 정렬됩니다.
pub fn boxed_title_lines(title: &str) -> [String; 3] {
    let border = "═".repeat(BOX_WIDTH);
    [
        format!("╔{}╗", border),
        format!("║{:^width$}║", title, width = BOX_WIDTH),
        format!("╚{}╝", border),
    ]
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║           DIRECTORY PROVISIONING BACKEND         ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    for line in boxed_title_lines(title) {
        println!("{}", line);
    }
}

/// 부트스트랩 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Directory gateway
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 단계 안의 구성 요소 상태를 표시합니다
///
/// ```text
///    ├─ GoogleDirectory: ready
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 부트스트랩 완료 요약을 출력합니다
pub fn print_bootstrap_summary(services: usize, bind_address: &str, workers: usize) {
    println!();
    print_boxed_title("🎉 PROVISIONING BACKEND READY");
    println!("   🔧 Services: {}", services);
    println!("   🌐 Listening: {}", bind_address);
    println!("   🧵 Workers: {}", workers);
    println!();
}
