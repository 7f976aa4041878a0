#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(project) = woodcut_editor::parse_woodcut(content) {
        let _ = project.document_order();
        let _ = woodcut_editor::write_woodcut(&project);
    }
});
