//! Process-tree teardown primitives (component K).
//!
//! A CGI child is free to spawn further children; a naive "kill the direct child"
//! leaks the rest of the tree. On every platform we put the child in a fresh
//! process group (POSIX) or job object (Windows) at spawn time so one signal
//! terminates the whole tree.

use std::io;
use tokio::process::Command;

#[cfg(unix)]
pub fn prepare_new_group(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;
    // SAFETY: setpgid(0, 0) only touches the child's own process state after
    // fork() and before exec(); it calls no allocator and is async-signal-safe.
    unsafe {
        cmd.pre_exec(|| {
            if libc::setpgid(0, 0) != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(())
        });
    }
}

#[cfg(windows)]
pub fn prepare_new_group(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    cmd.creation_flags(CREATE_NEW_PROCESS_GROUP);
}

/// A live handle on the group/job that was created for one child at spawn time.
/// `kill_tree` is idempotent-ish: calling it after the tree already exited is a
/// harmless no-op error that callers should ignore.
pub struct GroupHandle {
    #[cfg(unix)]
    pgid: i32,
    #[cfg(windows)]
    job: windows_sys::Win32::Foundation::HANDLE,
}

impl GroupHandle {
    #[cfg(unix)]
    pub fn for_child(pid: u32) -> Self {
        Self { pgid: pid as i32 }
    }

    #[cfg(windows)]
    pub fn for_child(pid: u32) -> io::Result<Self> {
        use windows_sys::Win32::Foundation::CloseHandle;
        use windows_sys::Win32::System::JobObjects::{
            AssignProcessToJobObject, CreateJobObjectW, JobObjectExtendedLimitInformation,
            SetInformationJobObject, JOBOBJECT_EXTENDED_LIMIT_INFORMATION,
            JOB_OBJECT_LIMIT_KILL_ON_JOB_CLOSE,
        };
        use windows_sys::Win32::System::Threading::{OpenProcess, PROCESS_ALL_ACCESS};

        unsafe {
            let job = CreateJobObjectW(std::ptr::null(), std::ptr::null());
            if job == 0 {
                return Err(io::Error::last_os_error());
            }

            let mut info: JOBOBJECT_EXTENDED_LIMIT_INFORMATION = std::mem::zeroed();
            info.BasicLimitInformation.LimitFlags = JOB_OBJECT_LIMIT_KILL_ON_JOB_CLOSE;
            let set_ok = SetInformationJobObject(
                job,
                JobObjectExtendedLimitInformation,
                &info as *const _ as *const _,
                std::mem::size_of::<JOBOBJECT_EXTENDED_LIMIT_INFORMATION>() as u32,
            );
            if set_ok == 0 {
                CloseHandle(job);
                return Err(io::Error::last_os_error());
            }

            let process = OpenProcess(PROCESS_ALL_ACCESS, 0, pid);
            if process == 0 {
                CloseHandle(job);
                return Err(io::Error::last_os_error());
            }

            let assign_ok = AssignProcessToJobObject(job, process);
            CloseHandle(process);
            if assign_ok == 0 {
                CloseHandle(job);
                return Err(io::Error::last_os_error());
            }

            Ok(Self { job })
        }
    }

    /// Terminates every process in the group/job. Best-effort: errors are reported
    /// but not fatal, since the tree may have already exited on its own.
    #[cfg(unix)]
    pub fn kill_tree(&self) -> io::Result<()> {
        // SAFETY: kill() is a plain libc syscall; negating the pid targets the
        // whole process group rather than just the leader.
        let rc = unsafe { libc::kill(-self.pgid, libc::SIGKILL) };
        if rc != 0 {
            let err = io::Error::last_os_error();
            if err.raw_os_error() == Some(libc::ESRCH) {
                return Ok(());
            }
            return Err(err);
        }
        Ok(())
    }

    #[cfg(windows)]
    pub fn kill_tree(&self) -> io::Result<()> {
        use windows_sys::Win32::System::JobObjects::TerminateJobObject;
        let ok = unsafe { TerminateJobObject(self.job, 1) };
        if ok == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

// `GroupHandle` is the teardown guard: its `Drop` kills the tree unconditionally,
// not just on the explicit cancellation path. This is what makes a client
// disconnect safe even though nothing else notices it — when hyper drops the
// in-flight handler future, this value is dropped along with it, and the process
// tree goes down synchronously without anyone having to detect the disconnect
// first. Killing an already-exited tree is a no-op (see `kill_tree`).
#[cfg(unix)]
impl Drop for GroupHandle {
    fn drop(&mut self) {
        let _ = self.kill_tree();
    }
}

#[cfg(windows)]
impl Drop for GroupHandle {
    fn drop(&mut self) {
        let _ = self.kill_tree();
        unsafe {
            windows_sys::Win32::Foundation::CloseHandle(self.job);
        }
    }
}
