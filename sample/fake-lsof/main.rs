// Prints a canned lsof listing so the integration tests can run without lsof
// installed. Passing -F selects the tagged layout, matching the arguments the
// library sends for that format.
fn main() {
    let tagged = std::env::args().any(|arg| arg == "-F");
    if tagged {
        print!(
            "p312\ncsshd\nu0\nf5u\ntIPv4\nn*:22\n\
             p645\ncpostgres\nu70\nf7u\ntIPv4\nn*:5432\n"
        );
    } else {
        print!(
            "COMMAND  PID USER   FD   TYPE DEVICE SIZE/OFF NODE NAME\n\
             sshd     312 root    5u  IPv4 0x1a2b      0t0  TCP *:22 (LISTEN)\n\
             postgres 645 _pg     7u  IPv4 0x3c4d      0t0  TCP *:5432 (LISTEN)\n\
             chrome   902 alice  33u  IPv4 0x5e6f      0t0  TCP 10.0.0.5:52114->142.250.1.1:443 (ESTABLISHED)\n"
        );
    }
}
